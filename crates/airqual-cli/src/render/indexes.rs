use super::{runs_by, titled};
use airqual_types::{Attributes, Feature, Result, required};
use owo_colors::OwoColorize;

/// The service reports "no hour" as this sentinel rather than a null.
const NO_HOUR: &str = "N.h";

/// Index measurements grouped by `(date, station)`.
///
/// A new title block starts exactly when either key component differs from
/// the immediately preceding feature's; the input is server-sorted by date,
/// station name and pollutant.
pub fn report(features: &[Feature], colored: bool) -> Result<String> {
    let mut out = String::new();
    let groups = runs_by(features, |feature| {
        (
            feature.attributes.date.clone(),
            feature.attributes.station_id.clone(),
        )
    });

    for (fresh, feature) in groups {
        let attr = &feature.attributes;
        if fresh {
            let title = format!(
                "{} - {}",
                required(&attr.station_name, "estacao_nome")?,
                required(&attr.date, "data")?.to_short_date(),
            );
            titled(&mut out, &title);
        }
        out.push_str(&line(attr, colored)?);
        out.push('\n');
    }

    Ok(out)
}

fn line(attr: &Attributes, colored: bool) -> Result<String> {
    let mut line = format!(
        "{} - {} ({}) - {}",
        required(&attr.pollutant_abv, "poluente_abv")?,
        required(&attr.avg_display, "avg_display")?,
        required(&attr.pollutant_agr, "poluente_agr")?,
        required(&attr.index_name, "indice_nome")?,
    );

    let hour = required(&attr.hour_display, "hora_display")?;
    if hour != NO_HOUR {
        line.push_str(&format!(" ({})", hour));
    }

    if attr.alert_active() {
        if colored {
            line.push_str(&format!(" {}", "ALERT!".red().bold()));
        } else {
            line.push_str(" ALERT!");
        }
    }

    Ok(line)
}
