use crate::constants::*;
use kinesign_core::utils::Redact;
use kinesign_core::Context;
use std::fmt::{Debug, Formatter};

/// Config for kinesis request signing.
#[derive(Clone, Default)]
pub struct Config {
    /// `region` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_REGION`]
    /// - env value: [`AWS_REGION_NAME`]
    ///
    /// When set, it overrides the region derived from the request host.
    pub region: Option<String>,
    /// `service` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`KINESIS_SIGN_SERVICE`]
    ///
    /// When set, it overrides the service derived from the request host.
    pub service: Option<String>,
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_ACCESS_KEY_ID`]
    /// - env value: [`AWS_ACCESS_KEY`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SECRET_ACCESS_KEY`]
    /// - env value: [`AWS_SECRET_KEY`]
    pub secret_access_key: Option<String>,
    /// `session_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SESSION_TOKEN`]
    /// - env value: [`AWS_SECURITY_TOKEN`]
    pub session_token: Option<String>,
}

impl Config {
    /// Fill the unset fields from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        fill(&mut self.region, ctx, &[AWS_REGION, AWS_REGION_NAME]);
        fill(&mut self.service, ctx, &[KINESIS_SIGN_SERVICE]);
        fill(
            &mut self.access_key_id,
            ctx,
            &[AWS_ACCESS_KEY_ID, AWS_ACCESS_KEY],
        );
        fill(
            &mut self.secret_access_key,
            ctx,
            &[AWS_SECRET_ACCESS_KEY, AWS_SECRET_KEY],
        );
        fill(
            &mut self.session_token,
            ctx,
            &[AWS_SESSION_TOKEN, AWS_SECURITY_TOKEN],
        );
        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("service", &self.service)
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("session_token", &Redact::from(&self.session_token))
            .finish()
    }
}

fn fill(field: &mut Option<String>, ctx: &Context, keys: &[&str]) {
    if field.is_none() {
        *field = ctx.env_var_any(keys);
    }
}
