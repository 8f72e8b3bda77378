pub mod config;
#[cfg(feature = "silero")]
pub mod silero_oracle;

pub use config::SileroOracleConfig;

#[cfg(feature = "silero")]
pub use silero_oracle::SileroOracle;
