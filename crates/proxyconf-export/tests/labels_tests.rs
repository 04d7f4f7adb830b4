//! Integration tests for label and port extraction

use std::collections::BTreeMap;

use proptest::prelude::*;
use proxyconf_config::{
    Api, Configuration, ConfigurationBuilder, KubernetesCrdProvider, Log, ProviderKind,
    default_configuration,
};
use proxyconf_export::{Error, extract_labels, extract_ports};
use rstest::rstest;

#[rstest]
#[case(ProviderKind::Docker, vec!["providers.docker"])]
#[case(ProviderKind::KubernetesCrd, vec!["providers.kubernetescrd"])]
#[case(ProviderKind::File, vec![])]
fn test_untouched_provider_yields_marker_only(
    #[case] kind: ProviderKind,
    #[case] expected: Vec<&str>,
) {
    let conf = ConfigurationBuilder::new().add_provider(kind).unwrap().build();

    assert_eq!(extract_labels(&conf, "").unwrap(), expected);
}

#[test]
fn test_overridden_settings() {
    let mut conf = default_configuration(ProviderKind::Docker);
    {
        let docker = conf.providers.as_mut().unwrap().docker.as_mut().unwrap();
        docker.exposed_by_default = false;
        docker.network = "proxy".to_string();
    }
    conf.log = Some(Log::with_level("INFO"));
    conf.api = Some(Api {
        insecure: Some(true),
        ..Api::default()
    });

    let labels = extract_labels(&conf, "").unwrap();

    insta::assert_snapshot!(labels.join("\n"), @r###"
    api.insecure=true
    entrypoints.web.address=:8000
    entrypoints.websecure.address=:8443
    log.level=info
    providers.docker
    providers.docker.exposedbydefault=false
    providers.docker.network=proxy
    "###);
}

#[test]
fn test_kubernetes_namespaces_are_joined() {
    let mut conf = default_configuration(ProviderKind::KubernetesCrd);
    conf.providers.as_mut().unwrap().kubernetes_crd = Some(KubernetesCrdProvider {
        namespaces: vec!["default".to_string(), "Ingress".to_string()],
        ..KubernetesCrdProvider::default()
    });

    let labels = extract_labels(&conf, "--").unwrap();

    assert!(labels.contains(&"--providers.kubernetescrd.namespaces=default,ingress".to_string()));
    assert!(labels.contains(&"--providers.kubernetescrd".to_string()));
}

#[test]
fn test_empty_configuration_has_no_labels() {
    assert!(extract_labels(&Configuration::default(), "--").unwrap().is_empty());
}

fn configuration_with(entry_points: &BTreeMap<String, u16>) -> Configuration {
    entry_points
        .iter()
        .fold(ConfigurationBuilder::new(), |builder, (name, port)| {
            builder.add_entry_point(name, format!(":{port}")).unwrap()
        })
        .add_docker_provider()
        .unwrap()
        .build()
}

proptest! {
    #[test]
    fn test_labels_are_deterministic_and_sorted(
        entry_points in prop::collection::btree_map("[a-z]{1,8}", any::<u16>(), 0..8)
    ) {
        let conf = configuration_with(&entry_points);

        let first = extract_labels(&conf, "--").unwrap();
        let second = extract_labels(&conf, "--").unwrap();
        prop_assert_eq!(&first, &second);

        let mut sorted = first.clone();
        sorted.sort();
        prop_assert_eq!(first, sorted);
    }

    #[test]
    fn test_ports_are_sorted_by_name(
        entry_points in prop::collection::btree_map("[a-z]{1,8}", any::<u16>(), 0..8)
    ) {
        let conf = configuration_with(&entry_points);

        let ports = extract_ports(&conf.entry_points).unwrap();

        let names: Vec<_> = ports.iter().map(|p| p.name.clone()).collect();
        let expected: Vec<_> = entry_points.keys().cloned().collect();
        prop_assert_eq!(names, expected);
        for port in &ports {
            prop_assert_eq!(&port.port, &entry_points[&port.name].to_string());
        }
    }

    #[test]
    fn test_one_malformed_address_fails_everything(
        entry_points in prop::collection::btree_map("[a-z]{1,8}", any::<u16>(), 0..8)
    ) {
        let mut conf = configuration_with(&entry_points);
        conf.entry_points.insert("zzz-broken".to_string(), proxyconf_config::EntryPoint::new("no-port"));

        let result = extract_ports(&conf.entry_points);
        let is_port_error = matches!(result, Err(Error::PortExtraction { .. }));
        prop_assert!(is_port_error);
    }
}
