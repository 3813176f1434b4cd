//! Library integration tests.

use swarmgate::api::{MockApi, PrerequisitesCheckResponse};
use swarmgate::gate::{GateState, PrerequisiteGate, UsageScope};
use swarmgate::SwarmGateError;

fn passing() -> PrerequisitesCheckResponse {
    PrerequisitesCheckResponse {
        supported_dms: true,
        supported_database: true,
        central_database_not_configured: true,
        legacy_reports_and_dashboards_disabled: true,
        no_incompatible_enhanced_services_on_dms: true,
        satisfies_prerequisites: true,
        ..Default::default()
    }
}

#[test]
fn error_types_are_public() {
    let err = SwarmGateError::InvalidInput {
        message: "test".into(),
    };
    assert!(err.to_string().contains("test"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> swarmgate::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use swarmgate::cli::{Cli, Commands};

    let cli = Cli::parse_from(["swarmgate", "check", "--json"]);

    if let Commands::Check(args) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn gate_walks_to_a_single_confirmation() {
    let api = MockApi::new();
    api.queue_check_responses(vec![passing()]);
    api.queue_check_responses(vec![PrerequisitesCheckResponse {
        no_obsolete_alarm_id_usage_in_protocol_q_actions: Some(true),
        no_obsolete_alarm_id_usage_in_scripts: Some(true),
        ..passing()
    }]);

    let mut gate = PrerequisiteGate::new(&api, UsageScope::Cluster);
    gate.evaluate_structural().unwrap();
    assert!(gate.confirmation().is_none());

    gate.request_usage_analysis().unwrap();
    assert!(gate.state().is_confirmation_offered());

    gate.confirmation().unwrap().execute().unwrap();
    assert!(gate.confirmation().is_none());
    assert_eq!(api.enable_requests(), 1);
}

#[test]
fn usage_analysis_requires_structural_pass() {
    let api = MockApi::new();
    api.queue_check_responses(vec![PrerequisitesCheckResponse {
        supported_database: false,
        satisfies_prerequisites: false,
        ..passing()
    }]);

    let mut gate = PrerequisiteGate::new(&api, UsageScope::LocalAgent);
    gate.evaluate_structural().unwrap();

    let err = gate.request_usage_analysis().unwrap_err();
    assert!(matches!(err, SwarmGateError::InvalidTransition { .. }));
    assert_eq!(gate.state(), GateState::StructuralFailed);
    assert_eq!(api.agent_lookups(), 0);
    assert_eq!(api.usage_checks(), 0);
}
