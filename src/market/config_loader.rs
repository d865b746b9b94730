use regex::{Captures, Regex};
use serde::de::DeserializeOwned;
use std::{env, fs};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub trait ConfigLoaderSync {
    type SectionType;

    fn load_section_from_file_sync(file_name: String) -> Result<Self::SectionType, LoadConfigError>;
}

pub fn load_from_str<T: DeserializeOwned>(contents: &str) -> Result<T, LoadConfigError> {
    let contents = expand_vars(contents);
    let config: T = toml::from_str(&contents)?;
    Ok(config)
}

pub fn load_from_file_sync<T: DeserializeOwned>(file_name: String) -> Result<T, LoadConfigError> {
    let contents = fs::read_to_string(file_name)?;
    load_from_str(&contents)
}

fn expand_vars(raw_config: &str) -> String {
    // https://stackoverflow.com/questions/62888154/rust-load-environment-variables-into-log4rs-yml-file
    let re = Regex::new(r"\$\{([a-zA-Z_][0-9a-zA-Z_]*)\}").unwrap();
    re.replace_all(raw_config, |caps: &Captures| match env::var(&caps[1]) {
        Ok(val) => val,
        Err(_) => caps[0].to_string(),
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        name: String,
    }

    #[test]
    fn test_load_from_str() {
        let sample: Sample = load_from_str("name = \"tokenB\"").unwrap();
        assert_eq!(sample.name, "tokenB");
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let result: Result<Sample, _> = load_from_str("name = ");
        assert!(matches!(result, Err(LoadConfigError::TomlError(_))));
    }

    #[test]
    fn test_unset_vars_are_left_untouched() {
        let expanded = expand_vars("name = \"${SWAP_ROUTER_UNSET_VAR}\"");
        assert_eq!(expanded, "name = \"${SWAP_ROUTER_UNSET_VAR}\"");
    }
}
