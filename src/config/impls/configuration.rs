use std::fs::File;
use std::io::Write;
use std::process::exit;
use regex::Regex;
use crate::common::common::default_client_id;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::client_config::ClientConfig;
use crate::config::structs::configuration::Configuration;
use crate::structs::Cli;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            client: ClientConfig {
                server: String::from("127.0.0.1"),
                port: 9650,
                client_id: String::from(""),
                redis_master_file: String::from("redis_master.txt"),
                heartbeat_interval: 5,
                reconnect_interval: 1,
            }
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn load_from_file(create: bool, path: &str) -> Result<Configuration, CustomError> {
        let config = Configuration::init();
        match Configuration::load_file(path) {
            Ok(config) => Ok(config),
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own config file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new("will not create automatically config.toml file"));
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&config).unwrap();
                let save_file = Configuration::save_file(path, config_toml);
                match save_file {
                    Ok(_) => {
                        eprintln!("Please edit the config file '{path}', exiting now...");
                        Err(CustomError::new("create config.toml file"))
                    }
                    Err(e) => {
                        eprintln!("Config file '{path}' could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new("could not create config.toml file"))
                    }
                }
            }
        }
    }

    /// Applies command line overrides on top of the loaded file, then fills
    /// in the client identity when neither the file nor the CLI set one.
    pub fn merge_cli(mut self, args: &Cli) -> Configuration {
        if let Some(server) = &args.server { self.client.server = server.clone(); }
        if let Some(port) = args.port { self.client.port = port; }
        if let Some(id) = &args.id { self.client.client_id = id.clone(); }
        if let Some(path) = &args.redis_master_file { self.client.redis_master_file = path.clone(); }
        if let Some(interval) = args.heartbeat_interval { self.client.heartbeat_interval = interval; }
        if self.client.client_id.is_empty() {
            self.client.client_id = default_client_id();
        }
        self
    }

    /// Counts invalid settings. Runs on the fully merged configuration, so
    /// CLI overrides are checked as strictly as file values.
    pub fn validation_errors(config: &Configuration) -> u32 {
        // Check Map
        let check_map = vec![
            ("[CLIENT] server", config.client.server.clone(), r"^[0-9a-zA-Z.\-]+$".to_string()),
            ("[CLIENT] redis_master_file", config.client.redis_master_file.clone(), r"^\S+$".to_string()),
        ];

        // Validation
        let mut errors = 0u32;
        for (name, value, check) in check_map {
            let regex = Regex::new(check.as_str()).unwrap();
            if !value.is_empty() && !regex.is_match(value.as_str()) {
                eprintln!("[VALIDATE] {} has an invalid value: '{}'", name, value);
                errors += 1;
            }
        }
        if config.client.port == 0 {
            eprintln!("[VALIDATE] [CLIENT] port must not be 0");
            errors += 1;
        }
        if config.client.heartbeat_interval == 0 {
            eprintln!("[VALIDATE] [CLIENT] heartbeat_interval must be at least 1");
            errors += 1;
        }
        errors
    }

    pub fn validate(config: Configuration) {
        println!("[VALIDATE] Validating configuration...");
        if Self::validation_errors(&config) > 0 {
            eprintln!("[VALIDATE] Configuration is invalid, exiting...");
            exit(101);
        }
    }
}
