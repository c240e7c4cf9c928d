use super::{runs_by, titled};
use airqual_types::{Attributes, Feature, Result, required};

const NO_HOUR: &str = "N.h";

/// Alerts grouped by station alone.
///
/// The title uses the date of the first feature in the station's run; the
/// input is server-sorted by station name, date and pollutant. No alert
/// marker here, every line already is one.
pub fn report(features: &[Feature]) -> Result<String> {
    let mut out = String::new();
    let groups = runs_by(features, |feature| feature.attributes.station_id.clone());

    for (fresh, feature) in groups {
        let attr = &feature.attributes;
        if fresh {
            let title = format!(
                "{} ({}) - {}",
                required(&attr.station_name, "estacao_nome")?,
                required(&attr.station_id, "estacao_id")?,
                required(&attr.date, "data")?.to_short_date(),
            );
            titled(&mut out, &title);
        }
        out.push_str(&line(attr)?);
        out.push('\n');
    }

    Ok(out)
}

fn line(attr: &Attributes) -> Result<String> {
    let mut line = format!(
        "{} - {} - {} - {}",
        required(&attr.date, "data")?.to_short_date(),
        required(&attr.pollutant_abv, "poluente_abv")?,
        required(&attr.avg_display, "avg_display")?,
        required(&attr.index_name, "indice_nome")?,
    );

    let hour = required(&attr.hour_display, "hora_display")?;
    if hour != NO_HOUR {
        line.push_str(&format!(" ({})", hour));
    }

    Ok(line)
}
