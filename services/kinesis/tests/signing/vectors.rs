use super::*;
use kinesign_kinesis::{Credential, RequestSigner};
use pretty_assertions::assert_eq;
use test_case::test_case;

const STANDARD: [&str; 4] = [
    "AWS4-HMAC-SHA256 Credential=ASWKEY/20131128/us-east-1/kinesis/aws4_request, SignedHeaders=content-type;date;host;user-agent;x-amz-target, Signature=6c21aca39f1d4afd383fbc45dd3a580192036162f74bf9fda6cad6c6fb7cde2f",
    "AWS4-HMAC-SHA256 Credential=ASWKEY2/20131128/us-east-1/kinesis/aws4_request, SignedHeaders=authorization;content-type;date;host;user-agent;x-amz-target, Signature=0b442a629ffe0a405f718f8e50ffdbe3886574687fe3d60dffcc09d67e4aff5a",
    "AWS4-HMAC-SHA256 Credential=ASWNEWKEY/20131128/us-east-1/kinesis/aws4_request, SignedHeaders=authorization;content-type;date;host;user-agent;x-amz-target, Signature=f92bd23b4e9f6163779c93dee8b34c673ae394f934b4562dcebfdf4adef9685e",
    "AWS4-HMAC-SHA256 Credential=ASWKEY/20131125/us-east-1/kinesis/aws4_request, SignedHeaders=authorization;content-type;date;host;user-agent;x-amz-target, Signature=cabe7376fd1b308e8fda031be50a013509dba601445573c5527c1be205c59fa5",
];

const CUSTOM: [&str; 4] = [
    "AWS4-HMAC-SHA256 Credential=ASWKEY/20131128///aws4_request, SignedHeaders=content-type;date;host;user-agent;x-amz-target, Signature=a1a3c571ad100fd1483a5c699475f84b0407c37a76b9c20fa53b579b36033930",
    "AWS4-HMAC-SHA256 Credential=ASWKEY2/20131128///aws4_request, SignedHeaders=authorization;content-type;date;host;user-agent;x-amz-target, Signature=fd47c35be18a84323122fefbe9cccbf251bbf06d4c75d701e4ef89393f89445d",
    "AWS4-HMAC-SHA256 Credential=ASWNEWKEY/20131128///aws4_request, SignedHeaders=authorization;content-type;date;host;user-agent;x-amz-target, Signature=a4bebba353dfcccf93c8eca519005b9473f8a9f181e07ead591ee9fc1d808287",
    "AWS4-HMAC-SHA256 Credential=ASWKEY/20131125///aws4_request, SignedHeaders=authorization;content-type;date;host;user-agent;x-amz-target, Signature=cf07b40df788d4428f312147f2eea634aea161a7813a11250d38056c8adb2749",
];

/// Each step signs the request left behind by the previous one, so from the second step
/// on the stale Authorization header is part of the signature.
const STEPS: [(&str, &str, Option<&str>, &str); 4] = [
    ("ASWKEY", "AWSSECRET", Some("TOKEN1"), NOV_28),
    ("ASWKEY2", "AWSSECRET2", Some("TOKEN2"), NOV_28),
    ("ASWNEWKEY", "AWSSECRET", None, NOV_28),
    ("ASWKEY", "AWSSECRET", Some("TOKEN1"), NOV_25),
];

#[test_case(STANDARD_URL, STANDARD; "standard host")]
#[test_case(CUSTOM_URL, CUSTOM; "custom host")]
fn test_sign_sequence(url: &str, expected: [&str; 4]) {
    init_signing_test();

    let signer = RequestSigner::new();
    let mut req = kinesis_request(url, NOV_28);

    for ((ak, sk, token, date), expected) in STEPS.into_iter().zip(expected) {
        let mut cred = Credential::new(ak, sk);
        if let Some(token) = token {
            cred = cred.with_session_token(token);
        }

        set_date(&mut req, date);
        signer.sign(&mut req, &cred).expect("sign must succeed");
        assert_eq!(authorization(&req), expected, "access key: {ak}");
    }
}

#[test_case(STANDARD_URL, None, STANDARD[0]; "standard host first sign")]
#[test_case(STANDARD_URL, Some(STANDARD[0]), STANDARD[1]; "standard host with stale authorization")]
#[test_case(CUSTOM_URL, None, CUSTOM[0]; "custom host first sign")]
#[test_case(CUSTOM_URL, Some(CUSTOM[0]), CUSTOM[1]; "custom host with stale authorization")]
fn test_sign_fresh_request(url: &str, stale: Option<&str>, expected: &str) {
    init_signing_test();

    let mut req = kinesis_request(url, NOV_28);
    let cred = match stale {
        Some(stale) => {
            req.headers_mut()
                .insert(http::header::AUTHORIZATION, stale.parse().unwrap());
            Credential::new("ASWKEY2", "AWSSECRET2")
        }
        None => Credential::new("ASWKEY", "AWSSECRET"),
    };

    RequestSigner::new()
        .sign(&mut req, &cred)
        .expect("sign must succeed");
    assert_eq!(authorization(&req), expected);
}

#[test_case("us-west-2", "kinesis", "AWS4-HMAC-SHA256 Credential=ASWKEY/20131128/us-west-2/kinesis/aws4_request, SignedHeaders=content-type;date;host;user-agent;x-amz-target, Signature=dc65c31ef050195bdd940d0860c581c5d5eb02c23f8f8565668b02ff21257ee2"; "custom host with overrides")]
fn test_sign_with_overrides(region: &str, service: &str, expected: &str) {
    init_signing_test();

    let mut req = kinesis_request(CUSTOM_URL, NOV_28);
    RequestSigner::new()
        .with_region(region)
        .with_service(service)
        .sign(&mut req, &Credential::new("ASWKEY", "AWSSECRET"))
        .expect("sign must succeed");

    assert_eq!(authorization(&req), expected);
}

#[test]
fn test_sign_host_with_port() -> anyhow::Result<()> {
    init_signing_test();

    let mut req = kinesis_request("http://localhost:4567", NOV_28);
    RequestSigner::new().sign(&mut req, &Credential::new("ASWKEY", "AWSSECRET"))?;

    assert_eq!(
        authorization(&req),
        "AWS4-HMAC-SHA256 Credential=ASWKEY/20131128///aws4_request, SignedHeaders=content-type;date;host;user-agent;x-amz-target, Signature=735f2a00d00b3e2bd73f86c97f4350bde7b13deb809f7e421cfd48e4826607c5"
    );
    Ok(())
}

#[test]
fn test_sign_non_ascii_user_agent() -> anyhow::Result<()> {
    init_signing_test();

    let mut req = kinesis_request(CUSTOM_URL, NOV_28);
    req.headers_mut().insert(
        http::header::USER_AGENT,
        http::HeaderValue::from_bytes("kinesis-client/1.0 (Zürich)".as_bytes())?,
    );
    RequestSigner::new().sign(&mut req, &Credential::new("ASWKEY", "AWSSECRET"))?;

    assert_eq!(
        authorization(&req),
        "AWS4-HMAC-SHA256 Credential=ASWKEY/20131128///aws4_request, SignedHeaders=content-type;date;host;user-agent;x-amz-target, Signature=17a04572d76bd58883878cba54eaecd0b4e54e0097e2bc9e0080717c286cca33"
    );
    Ok(())
}
