//! Deployment configuration for the livenet binaries
//!
//! One explicit struct threaded through the deploy functions instead of
//! module-level globals: which network we are on, which positional signing
//! account to use, and where the already-deployed collaborator contracts
//! live (if anywhere).

use core::str::FromStr;
use odra::host::HostEnv;
use odra::prelude::*;
use std::env;
use std::string::ToString;

/// Networks where deployed source should be published for verification
pub const VERIFY_NETWORKS: [&str; 3] = ["casper", "casper-test", "integration-test"];

/// Local development chains (mocks deployed, no verification)
pub const LOCAL_NETWORKS: [&str; 2] = ["casper-net-1", "dev-net"];

/// Env var carrying the active chain name (set by the Odra livenet runner)
const CHAIN_NAME_VAR: &str = "ODRA_CASPER_LIVENET_CHAIN_NAME";

/// Deployment configuration resolved once at binary startup
pub struct DeployConfig {
    /// Active network name
    pub network: String,
    /// Positional index of the signing account (0 is the default deployer)
    pub account_index: usize,
    /// Use production collaborator addresses instead of test defaults
    pub prod: bool,
    /// Override for the OneNFT contract address
    pub one_nft: Option<String>,
    /// Override for the TwoToken contract address
    pub two_token: Option<String>,
}

impl DeployConfig {
    /// Resolve configuration from the process environment
    ///
    /// * `ODRA_CASPER_LIVENET_CHAIN_NAME` - network name (default `casper-net-1`)
    /// * `CLAIM_ACCOUNT_INDEX` - signing account index (default 0)
    /// * `CLAIM_PROD` - set to `1` to wire production addresses
    /// * `ONE_NFT_ADDRESS` / `TWO_TOKEN_ADDRESS` - collaborator overrides
    pub fn from_env() -> Self {
        let network = env::var(CHAIN_NAME_VAR).unwrap_or_else(|_| "casper-net-1".to_string());
        let account_index = env::var("CLAIM_ACCOUNT_INDEX")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        let prod = env::var("CLAIM_PROD").map(|v| v == "1").unwrap_or(false);

        Self {
            network,
            account_index,
            prod,
            one_nft: env::var("ONE_NFT_ADDRESS").ok(),
            two_token: env::var("TWO_TOKEN_ADDRESS").ok(),
        }
    }

    /// Whether deployed source should be published for verification
    pub fn verify_source(&self) -> bool {
        VERIFY_NETWORKS.contains(&self.network.as_str())
    }

    /// Whether this is a local development chain
    pub fn is_local(&self) -> bool {
        LOCAL_NETWORKS.contains(&self.network.as_str())
    }

    /// Select the signing account and return its address
    pub fn signer(&self, env: &HostEnv) -> Address {
        let account = env.get_account(self.account_index);
        env.set_caller(account);
        account
    }

    /// Collaborator override addresses, parsed
    pub fn collaborator_addresses(&self) -> (Option<Address>, Option<Address>) {
        let parse = |s: &String| {
            Address::from_str(s)
                .ok()
                .or_else(|| Address::new(s.clone().leak()).ok())
        };
        (
            self.one_nft.as_ref().and_then(parse),
            self.two_token.as_ref().and_then(parse),
        )
    }
}
