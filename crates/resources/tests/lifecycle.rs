//! Lifecycle tests driving the engine through the real descriptor tables
//! against scripted remote responses.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use serde_json::json;

use stratus_api::{ApiResponse, ScriptedClient, TracingClient, RET_CODE_RESOURCE_NOT_FOUND};
use stratus_core::{AttrValue, Attributes, ResourceId, ResourceRecord, Zone};
use stratus_reconciler::{Error, Reconciler};
use stratus_resources::{EIP, KEY_PAIR, VOLUME, VXNET};

fn zone() -> Zone {
    Zone::new("pek3a")
}

#[tokio::test]
async fn eip_create_then_refresh_reports_allocated_state() {
    let client = ScriptedClient::new_arc();
    client
        .push_response(ApiResponse::success().with_field("eips", json!(["eip-abc123"])))
        .await;
    client
        .push_response(ApiResponse::success().with_field(
            "eip_set",
            json!([{
                "bandwidth": 2,
                "billing_mode": "bandwidth",
                "eip_name": "edge",
                "eip_addr": "117.25.48.1"
            }]),
        ))
        .await;

    let engine = Reconciler::new(client.clone(), &EIP);
    let desired = Attributes::new()
        .with("bandwidth", 2)
        .with("billing_mode", "bandwidth")
        .with("count", 1)
        .with("icp", false)
        .with("name", "edge");

    let id = engine.create(&zone(), &desired).await.unwrap();
    assert!(!id.is_empty());
    assert_eq!(id.as_str(), "eip-abc123");

    let observed = engine.refresh(&zone(), &id).await.unwrap();
    assert_eq!(observed.get("bandwidth"), Some(&AttrValue::Int(2)));
    assert_eq!(
        observed.get("eip_addr"),
        Some(&AttrValue::Str("117.25.48.1".into()))
    );

    // The caller persists the outcome as its reconciliation record.
    let record = ResourceRecord::new(zone(), id).with_observed(observed);
    assert_eq!(record.observed.get("bandwidth"), Some(&AttrValue::Int(2)));

    let allocate = client.calls().await;
    let request = &allocate.first().unwrap().request;
    assert_eq!(request.action, "AllocateEips");
    assert_eq!(request.param("bandwidth"), Some(&json!(2)));
    assert_eq!(request.param("eip_name"), Some(&json!("edge")));
    assert_eq!(request.param("need_icp"), Some(&json!(false)));
}

#[tokio::test]
async fn eip_bandwidth_change_calls_only_its_group() {
    let client = ScriptedClient::new_arc();
    client.push_response(ApiResponse::success()).await;
    client
        .push_response(ApiResponse::success().with_field(
            "eip_set",
            json!([{"bandwidth": 5, "eip_name": "edge"}]),
        ))
        .await;

    let engine = Reconciler::new(client.clone(), &EIP);
    let previous = Attributes::new().with("bandwidth", 2).with("name", "edge");
    let desired = Attributes::new().with("bandwidth", 5).with("name", "edge");

    let id = ResourceId::new("eip-abc123");
    let observed = engine
        .reconcile(&zone(), &id, &previous, &desired)
        .await
        .unwrap();

    assert_eq!(observed.get("bandwidth"), Some(&AttrValue::Int(5)));
    assert_eq!(
        client.actions().await,
        vec!["ChangeEipsBandwidth".to_owned(), "DescribeEips".to_owned()]
    );
}

#[tokio::test]
async fn eip_billing_is_always_applied_before_bandwidth() {
    let client = ScriptedClient::new_arc();
    client.push_response(ApiResponse::success()).await;
    client.push_response(ApiResponse::success()).await;
    client
        .push_response(ApiResponse::success().with_field(
            "eip_set",
            json!([{"bandwidth": 5, "billing_mode": "traffic"}]),
        ))
        .await;

    let engine = Reconciler::new(client.clone(), &EIP);
    let previous = Attributes::new()
        .with("bandwidth", 2)
        .with("billing_mode", "bandwidth");
    let desired = Attributes::new()
        .with("bandwidth", 5)
        .with("billing_mode", "traffic");

    engine
        .reconcile(&zone(), &ResourceId::new("eip-abc123"), &previous, &desired)
        .await
        .unwrap();

    assert_eq!(
        client.actions().await,
        vec![
            "ChangeEipsBillingMode".to_owned(),
            "ChangeEipsBandwidth".to_owned(),
            "DescribeEips".to_owned(),
        ]
    );
}

#[tokio::test]
async fn eip_noop_reconcile_is_fully_local() {
    let client = ScriptedClient::new_arc();
    let engine = Reconciler::new(client.clone(), &EIP);

    let state = Attributes::new()
        .with("bandwidth", 2)
        .with("billing_mode", "bandwidth")
        .with("name", "edge")
        .with("description", "edge ip");

    let observed = engine
        .reconcile(&zone(), &ResourceId::new("eip-abc123"), &state, &state)
        .await
        .unwrap();

    assert_eq!(observed, state);
    assert_eq!(client.call_count().await, 0);
}

#[tokio::test]
async fn eip_partial_edit_backfills_group_siblings() {
    let client = ScriptedClient::new_arc();
    client.push_response(ApiResponse::success()).await;
    client
        .push_response(
            ApiResponse::success().with_field("eip_set", json!([{"eip_name": "edge-2"}])),
        )
        .await;

    let engine = Reconciler::new(client.clone(), &EIP);
    let previous = Attributes::new()
        .with("name", "edge")
        .with("description", "edge ip");
    // Only the name changes; description is not mentioned.
    let desired = Attributes::new().with("name", "edge-2");

    engine
        .reconcile(&zone(), &ResourceId::new("eip-abc123"), &previous, &desired)
        .await
        .unwrap();

    let calls = client.calls().await;
    let modify = &calls.first().unwrap().request;
    assert_eq!(modify.action, "ModifyEipAttributes");
    assert_eq!(modify.param("eip"), Some(&json!("eip-abc123")));
    assert_eq!(modify.param("eip_name"), Some(&json!("edge-2")));
    assert_eq!(modify.param("description"), Some(&json!("edge ip")));
}

#[tokio::test]
async fn eip_refresh_is_idempotent() {
    let described = ApiResponse::success().with_field(
        "eip_set",
        json!([{"bandwidth": 2, "eip_name": "edge", "eip_addr": "117.25.48.1"}]),
    );
    let client = ScriptedClient::new_arc();
    client.push_response(described.clone()).await;
    client.push_response(described).await;

    let engine = Reconciler::new(client.clone(), &EIP);
    let id = ResourceId::new("eip-abc123");

    let first = engine.refresh(&zone(), &id).await.unwrap();
    let second = engine.refresh(&zone(), &id).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn eip_stale_identity_maps_to_not_found() {
    let client = ScriptedClient::new_arc();
    client
        .push_response(ApiResponse::success().with_field("eip_set", json!([])))
        .await;

    let engine = Reconciler::new(client.clone(), &EIP);
    let err = engine
        .refresh(&zone(), &ResourceId::new("eip-stale"))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn eip_create_rejection_carries_code_and_message() {
    let client = ScriptedClient::new_arc();
    client
        .push_response(ApiResponse::rejected(1400, "quota exceeded"))
        .await;

    let engine = Reconciler::new(client.clone(), &EIP);
    let desired = Attributes::new().with("bandwidth", 2);
    let err = engine.create(&zone(), &desired).await.unwrap_err();

    assert_eq!(
        err,
        Error::remote_rejected("AllocateEips", 1400, Some("quota exceeded".into()))
    );
}

#[tokio::test]
async fn eip_destroy_of_absent_resource_is_success() {
    let client = ScriptedClient::new_arc();
    client
        .push_response(ApiResponse::rejected(RET_CODE_RESOURCE_NOT_FOUND, "gone"))
        .await;

    let engine = Reconciler::new(client.clone(), &EIP);
    assert!(engine
        .destroy(&zone(), &ResourceId::new("eip-abc123"))
        .await
        .is_ok());
}

#[tokio::test]
async fn eip_failed_group_stops_the_pass_without_rollback() {
    let client = ScriptedClient::new_arc();
    // Billing succeeds, bandwidth is rejected; attributes must not run.
    client.push_response(ApiResponse::success()).await;
    client
        .push_response(ApiResponse::rejected(1300, "bandwidth not available"))
        .await;

    let engine = Reconciler::new(client.clone(), &EIP);
    let previous = Attributes::new()
        .with("bandwidth", 2)
        .with("billing_mode", "bandwidth")
        .with("name", "edge");
    let desired = Attributes::new()
        .with("bandwidth", 5)
        .with("billing_mode", "traffic")
        .with("name", "edge-2");

    let err = engine
        .reconcile(&zone(), &ResourceId::new("eip-abc123"), &previous, &desired)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        Error::remote_rejected("ChangeEipsBandwidth", 1300, Some("bandwidth not available".into()))
    );
    assert_eq!(
        client.actions().await,
        vec![
            "ChangeEipsBillingMode".to_owned(),
            "ChangeEipsBandwidth".to_owned(),
        ]
    );
}

#[tokio::test]
async fn key_pair_create_registers_with_fixed_mode() {
    let client = ScriptedClient::new_arc();
    client
        .push_response(ApiResponse::success().with_field("keypair_id", json!("kp-31fd0a7e")))
        .await;

    let engine = Reconciler::new(client.clone(), &KEY_PAIR);
    let desired = Attributes::new()
        .with("name", "deploy")
        .with("public_key", "ssh-ed25519 AAAAC3Nz...");

    let id = engine.create(&zone(), &desired).await.unwrap();
    assert_eq!(id.as_str(), "kp-31fd0a7e");

    let calls = client.calls().await;
    let request = &calls.first().unwrap().request;
    assert_eq!(request.action, "CreateKeyPair");
    assert_eq!(request.param("mode"), Some(&json!("user")));
    assert_eq!(request.param("keypair_name"), Some(&json!("deploy")));
}

#[tokio::test]
async fn key_pair_create_without_public_key_never_reaches_remote() {
    let client = ScriptedClient::new_arc();
    let engine = Reconciler::new(client.clone(), &KEY_PAIR);

    let desired = Attributes::new().with("name", "deploy");
    let err = engine.create(&zone(), &desired).await.unwrap_err();

    assert_eq!(err, Error::missing_attribute("key_pair", "public_key"));
    assert_eq!(client.call_count().await, 0);
}

#[tokio::test]
async fn key_pair_refresh_reports_derived_key_id() {
    let client = ScriptedClient::new_arc();
    client
        .push_response(ApiResponse::success().with_field(
            "keypair_set",
            json!([{
                "keypair_id": "kp-31fd0a7e",
                "keypair_name": "deploy",
                "public_key": "ssh-ed25519 AAAAC3Nz..."
            }]),
        ))
        .await;

    let engine = Reconciler::new(client.clone(), &KEY_PAIR);
    let observed = engine
        .refresh(&zone(), &ResourceId::new("kp-31fd0a7e"))
        .await
        .unwrap();

    assert_eq!(
        observed.get("key_id"),
        Some(&AttrValue::Str("kp-31fd0a7e".into()))
    );
}

#[tokio::test]
async fn volume_rename_and_resize_run_in_declared_order() {
    let client = ScriptedClient::new_arc();
    client.push_response(ApiResponse::success()).await;
    client.push_response(ApiResponse::success()).await;
    client
        .push_response(ApiResponse::success().with_field(
            "volume_set",
            json!([{"size": 20, "volume_name": "data-1"}]),
        ))
        .await;

    let engine = Reconciler::new(client.clone(), &VOLUME);
    let previous = Attributes::new().with("size", 10).with("name", "data");
    let desired = Attributes::new().with("size", 20).with("name", "data-1");

    let observed = engine
        .reconcile(&zone(), &ResourceId::new("vol-77"), &previous, &desired)
        .await
        .unwrap();

    assert_eq!(observed.get("size"), Some(&AttrValue::Int(20)));
    assert_eq!(
        client.actions().await,
        vec![
            "ModifyVolumeAttributes".to_owned(),
            "ResizeVolumes".to_owned(),
            "DescribeVolumes".to_owned(),
        ]
    );
}

#[tokio::test]
async fn volume_resize_sends_identity_list() {
    let client = ScriptedClient::new_arc();
    client.push_response(ApiResponse::success()).await;
    client
        .push_response(ApiResponse::success().with_field("volume_set", json!([{"size": 20}])))
        .await;

    let engine = Reconciler::new(client.clone(), &VOLUME);
    let previous = Attributes::new().with("size", 10);
    let desired = Attributes::new().with("size", 20);

    engine
        .reconcile(&zone(), &ResourceId::new("vol-77"), &previous, &desired)
        .await
        .unwrap();

    let calls = client.calls().await;
    let resize = &calls.first().unwrap().request;
    assert_eq!(resize.param("volumes"), Some(&json!(["vol-77"])));
    assert_eq!(resize.param("size"), Some(&json!(20)));
}

#[tokio::test]
async fn vxnet_create_tracks_first_object_identity() {
    let client = ScriptedClient::new_arc();
    client
        .push_response(ApiResponse::success().with_field(
            "vxnets",
            json!([{"vxnet_id": "vxnet-0db1bcf6"}]),
        ))
        .await;

    let engine = Reconciler::new(client.clone(), &VXNET);
    let desired = Attributes::new().with("type", 1).with("name", "private");

    let id = engine.create(&zone(), &desired).await.unwrap();
    assert_eq!(id.as_str(), "vxnet-0db1bcf6");

    let calls = client.calls().await;
    let request = &calls.first().unwrap().request;
    assert_eq!(request.action, "CreateVxNets");
    assert_eq!(request.param("count"), Some(&json!(1)));
    assert_eq!(request.param("vxnet_type"), Some(&json!(1)));
}

#[tokio::test]
async fn transport_fault_surfaces_without_identity() {
    let client = ScriptedClient::new_arc();
    client.push_transport_fault("connection reset by peer").await;

    let engine = Reconciler::new(client.clone(), &VXNET);
    let desired = Attributes::new().with("type", 1);
    let err = engine.create(&zone(), &desired).await.unwrap_err();

    assert_eq!(
        err,
        Error::Transport {
            reason: "connection reset by peer".into()
        }
    );
}

#[tokio::test]
async fn engine_composes_with_a_traced_client() {
    let scripted = ScriptedClient::new();
    scripted
        .push_response(ApiResponse::success().with_field("eips", json!(["eip-traced"])))
        .await;
    let client = Arc::new(TracingClient::new(scripted));

    let engine = Reconciler::new(client, &EIP);
    let desired = Attributes::new().with("bandwidth", 2);

    let id = engine.create(&zone(), &desired).await.unwrap();
    assert_eq!(id.as_str(), "eip-traced");
}
