mod mint_params;
pub use mint_params::MintParamsBuilder;
