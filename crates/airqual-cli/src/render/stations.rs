use airqual_types::{Feature, Result, required};

/// One line per station, in server-supplied order; no grouping.
pub fn report(features: &[Feature]) -> Result<String> {
    let mut out = String::new();
    for feature in features {
        let attr = &feature.attributes;
        out.push_str(&format!(
            "{}, {} ({})\n",
            required(&attr.municipality, "concelho_nome")?,
            required(&attr.station_name, "estacao_nome")?,
            required(&attr.station_id, "estacao_id")?,
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use airqual_types::{Attributes, StationId};

    fn station(municipality: &str, name: &str, id: i64) -> Feature {
        Feature {
            attributes: Attributes {
                municipality: Some(municipality.to_string()),
                station_name: Some(name.to_string()),
                station_id: Some(StationId::Number(id)),
                ..Default::default()
            },
        }
    }

    #[test]
    fn renders_one_line_per_station() {
        let features = vec![
            station("Lisboa", "Entrecampos", 3072),
            station("Lisboa", "Olivais", 3075),
        ];
        assert_eq!(
            report(&features).unwrap(),
            "Lisboa, Entrecampos (3072)\nLisboa, Olivais (3075)\n"
        );
    }

    #[test]
    fn missing_municipality_is_a_malformed_response() {
        let mut feature = station("Lisboa", "Entrecampos", 3072);
        feature.attributes.municipality = None;
        let err = report(&[feature]).unwrap_err();
        assert!(err.to_string().contains("concelho_nome"));
    }
}
