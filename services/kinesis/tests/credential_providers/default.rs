use super::context_with_env;
use kinesign_core::{ErrorKind, Signer};
use kinesign_kinesis::{Config, DefaultCredentialProvider, RequestSigner};
use std::sync::Arc;

use crate::signing::{authorization, kinesis_request, CUSTOM_URL, NOV_28};

#[tokio::test]
async fn test_signer_loads_credential_from_env() -> anyhow::Result<()> {
    let ctx = context_with_env(&[
        ("AWS_ACCESS_KEY_ID", "ASWKEY"),
        ("AWS_SECRET_ACCESS_KEY", "AWSSECRET"),
        ("AWS_SESSION_TOKEN", "TOKEN1"),
        ("AWS_REGION", "us-west-2"),
        ("KINESIS_SIGN_SERVICE", "kinesis"),
    ]);

    let cfg = Config::default().from_env(&ctx);
    let signer = Signer::new(
        ctx,
        DefaultCredentialProvider::new(),
        RequestSigner::from_config(&cfg),
    );

    let mut req = kinesis_request(CUSTOM_URL, NOV_28);
    signer.sign(&mut req).await?;

    assert_eq!(
        authorization(&req),
        "AWS4-HMAC-SHA256 Credential=ASWKEY/20131128/us-west-2/kinesis/aws4_request, SignedHeaders=content-type;date;host;user-agent;x-amz-target, Signature=dc65c31ef050195bdd940d0860c581c5d5eb02c23f8f8565668b02ff21257ee2"
    );
    assert_eq!(req.headers()["x-amz-security-token"], "TOKEN1");
    Ok(())
}

#[tokio::test]
async fn test_signer_falls_back_to_config() -> anyhow::Result<()> {
    let ctx = context_with_env(&[]);

    let cfg = Arc::new(Config {
        access_key_id: Some("ASWKEY".to_string()),
        secret_access_key: Some("AWSSECRET".to_string()),
        ..Default::default()
    });
    let signer = Signer::new(
        ctx,
        DefaultCredentialProvider::with_config(cfg.clone()),
        RequestSigner::from_config(&cfg),
    );

    let mut req = kinesis_request(CUSTOM_URL, NOV_28);
    signer.sign(&mut req).await?;

    assert_eq!(
        authorization(&req),
        "AWS4-HMAC-SHA256 Credential=ASWKEY/20131128///aws4_request, SignedHeaders=content-type;date;host;user-agent;x-amz-target, Signature=a1a3c571ad100fd1483a5c699475f84b0407c37a76b9c20fa53b579b36033930"
    );
    Ok(())
}

#[tokio::test]
async fn test_signer_without_credential() {
    let ctx = context_with_env(&[]);
    let signer = Signer::new(ctx, DefaultCredentialProvider::new(), RequestSigner::new());

    let mut req = kinesis_request(CUSTOM_URL, NOV_28);
    let before = req.headers().clone();

    let err = signer.sign(&mut req).await.expect_err("sign must fail");
    assert_eq!(err.kind(), ErrorKind::CredentialInvalid);
    assert_eq!(req.headers(), &before);
}
