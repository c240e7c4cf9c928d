/// Feature-service endpoints, resolved once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL of the QualAr ArcGIS map server.
    pub map_server: String,
}

const DEFAULT_MAP_SERVER: &str =
    "https://sniambgeoogc.apambiente.pt/getogc/rest/services/Visualizador/QAR/MapServer";

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            map_server: DEFAULT_MAP_SERVER.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Resolves the endpoint, honoring the `AIRQUAL_MAP_SERVER` override.
    pub fn from_env() -> Self {
        match std::env::var("AIRQUAL_MAP_SERVER") {
            Ok(url) if !url.is_empty() => Self { map_server: url },
            _ => Self::default(),
        }
    }

    /// Query endpoint of one map-server layer.
    pub(crate) fn layer_url(&self, layer: u32) -> String {
        format!("{}/{}/query", self.map_server, layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_url_targets_query_endpoint() {
        let config = ServiceConfig {
            map_server: "https://example.test/MapServer".to_string(),
        };
        assert_eq!(
            config.layer_url(9),
            "https://example.test/MapServer/9/query"
        );
    }
}
