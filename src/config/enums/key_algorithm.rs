use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Default)]
pub enum KeyAlgorithm {
    #[default]
    ecdsa_p256,
    ecdsa_p384,
    ed25519,
}
