/// Service settings. The port and database address are fixed by design and are
/// never read from the environment; tests override the fields directly.
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub mongodb: MongoSettings,
}

#[derive(Debug, Clone)]
pub struct MongoSettings {
    pub uri: String,
    pub database: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            port: 5000,
            mongodb: MongoSettings {
                uri: "mongodb://mongo:27017".to_string(),
                database: "multiapp".to_string(),
            },
        }
    }
}
