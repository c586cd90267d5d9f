#![cfg(not(target_arch = "wasm32"))]

use lunc_incinerator::{
    coins,
    mock::{MockClient, MockError, MockRequest, MockResponse, MockWallet},
    CommunityRole, ContractError, ContractRef, Env, ExecuteMsg, LuncIncinerator, QueryMsg, Refs,
    TxResponse, Uint128, CONTRACT_NAME,
};
use serde_json::json;
use std::{collections::HashMap, sync::Arc};

const CONTRACT: &str = "terra1incinerator";
const OWNER: &str = "terra1owner";

fn setup() -> (LuncIncinerator<MockClient, MockWallet>, MockClient) {
    let refs: Refs = [(
        CONTRACT_NAME.to_string(),
        ContractRef {
            code_id: Some("1".to_string()),
            contract_addresses: HashMap::from([("default".to_string(), CONTRACT.to_string())]),
        },
    )]
    .into_iter()
    .collect();
    let client = MockClient::new();
    let env = Env::new("localterra", client.clone(), MockWallet::new(OWNER), refs);
    (LuncIncinerator::new(Arc::new(env)).unwrap(), client)
}

fn tx(txhash: &str) -> TxResponse {
    TxResponse { txhash: txhash.to_string(), height: 10, ..Default::default() }
}

#[tokio::test]
async fn queries_community_roles() {
    let (incinerator, client) = setup();

    client.push("terra1dao").unwrap();
    client.push("terra1dev").unwrap();
    assert_eq!(incinerator.community_owner().call().await.unwrap(), "terra1dao");
    assert_eq!(incinerator.community_developer().call().await.unwrap(), "terra1dev");

    client
        .assert_request(MockRequest::query(CONTRACT, &QueryMsg::CommunityOwner {}).unwrap())
        .unwrap();
    client
        .assert_request(MockRequest::Query {
            contract: CONTRACT.to_string(),
            msg: json!({"community_developer": {}}),
        })
        .unwrap();
}

#[tokio::test]
async fn deposit_sends_funds_from_default_wallet() {
    let (incinerator, client) = setup();
    client.push(tx("D1")).unwrap();

    let res = incinerator.deposit().funds(coins(1_000_000, "uluna")).send().await.unwrap();
    assert_eq!(res.txhash, "D1");

    client
        .assert_request(MockRequest::Execute {
            sender: OWNER.to_string(),
            contract: CONTRACT.to_string(),
            msg: json!({"deposit": {}}),
            funds: coins(1_000_000, "uluna"),
        })
        .unwrap();
}

#[tokio::test]
async fn owner_operations() {
    let (incinerator, client) = setup();
    client.push(tx("W1")).unwrap();
    client.push(tx("B1")).unwrap();
    client.push(tx("C1")).unwrap();

    incinerator.withdraw("terra1recipient", 25u32).send().await.unwrap();
    incinerator.burn(Uint128::new(1_000)).send().await.unwrap();
    incinerator.change_community_info(CommunityRole::Owner {}, "terra1next").send().await.unwrap();

    client
        .assert_request(
            MockRequest::execute(
                OWNER,
                CONTRACT,
                &json!({"withdraw": {"recipient": "terra1recipient", "amount": "25"}}),
                &[],
            )
            .unwrap(),
        )
        .unwrap();
    client
        .assert_request(
            MockRequest::execute(OWNER, CONTRACT, &json!({"burn": {"amount": "1000"}}), &[])
                .unwrap(),
        )
        .unwrap();
    client
        .assert_request(
            MockRequest::execute(
                OWNER,
                CONTRACT,
                &ExecuteMsg::ChangeCommunityInfo {
                    role: CommunityRole::Owner {},
                    value: "terra1next".to_string(),
                },
                &[],
            )
            .unwrap(),
        )
        .unwrap();
    assert_eq!(client.pending_requests(), 0);
}

#[tokio::test]
async fn other_signer() {
    let (incinerator, client) = setup();
    client.push(tx("X1")).unwrap();

    let call = incinerator.burn(4u32).from(MockWallet::new("terra1intruder"));
    assert_eq!(call.sender(), "terra1intruder");
    call.send().await.unwrap();

    client
        .assert_request(
            MockRequest::execute("terra1intruder", CONTRACT, &json!({"burn": {"amount": "4"}}), &[])
                .unwrap(),
        )
        .unwrap();
}

#[tokio::test]
async fn reverted_transaction() {
    let (incinerator, client) = setup();
    client
        .push(TxResponse {
            txhash: "F1".to_string(),
            height: 11,
            code: 5,
            raw_log: "failed to execute message; message index: 0: Unauthorized".to_string(),
        })
        .unwrap();

    let err = incinerator.withdraw("terra1thief", 1u32).send().await.unwrap_err();
    match err {
        ContractError::Reverted { txhash, code, raw_log } => {
            assert_eq!(txhash, "F1");
            assert_eq!(code, 5);
            assert!(raw_log.ends_with("Unauthorized"));
        }
        _ => panic!("expected a reverted transaction"),
    }
}

#[tokio::test]
async fn client_errors_are_forwarded() {
    let (incinerator, client) = setup();
    client.push_response(MockResponse::Error("connection refused".to_string()));

    let err = incinerator.community_owner().call().await.unwrap_err();
    match err {
        ContractError::ClientError(MockError::Rejected(message)) => {
            assert_eq!(message, "connection refused")
        }
        _ => panic!("expected a client error"),
    }
}

#[tokio::test]
async fn undecodable_answer() {
    let (incinerator, client) = setup();
    client.push(json!({"owner": 42})).unwrap();

    let err = incinerator.community_owner().call().await.unwrap_err();
    match err {
        ContractError::ClientError(MockError::SerdeJson(_)) => {}
        _ => panic!("expected a decoding error"),
    }
    assert_eq!(client.pending_requests(), 1);
}

#[test]
fn encoding_errors_convert() {
    let source = serde_json::from_str::<QueryMsg>("{").unwrap_err();
    let message = source.to_string();

    let err: ContractError<MockClient> = source.into();
    match &err {
        ContractError::SerdeJson(_) => {}
        _ => panic!("expected a serde error"),
    }
    assert_eq!(err.to_string(), message);
}
