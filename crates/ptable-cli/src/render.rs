use crate::cli::OutputFormat;
use crate::error::Result;
use ptable::core::models::column::Column;
use ptable::core::models::element::ElementDescriptor;
use ptable::core::models::family::Family;
use serde::Serialize;

pub fn descriptor(element: &ElementDescriptor, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(element)?),
        OutputFormat::Text => Ok(descriptor_text(element)),
    }
}

fn descriptor_text(element: &ElementDescriptor) -> String {
    let column = match element.column().group_number() {
        Some(group) => format!("{} ({})", element.column(), group),
        None => element.column().to_string(),
    };
    let fields = [
        ("Atomic number", element.atomic_number().to_string()),
        ("Atomic mass", element.atomic_mass().to_string()),
        ("Protons", element.protons().to_string()),
        ("Neutrons", element.neutrons().to_string()),
        ("Electrons", element.electrons().to_string()),
        ("Period", element.period().to_string()),
        ("Column", column),
        ("Family", element.family().to_string()),
        ("Metallic state", element.metallic_state().to_string()),
        ("Electron config", element.electron_config().to_string()),
        ("Short config", element.short_electron_config().to_string()),
        ("Highest orbital", element.highest_occupied_orbital().to_string()),
    ];

    let header = format!("{} ({})", element.display_name(), element.symbol());
    std::iter::once(header)
        .chain(
            fields
                .into_iter()
                .map(|(label, value)| format!("  {:<16} {}", format!("{}:", label), value)),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

/// One summary row per element.
#[derive(Serialize)]
struct ListRow<'a> {
    atomic_number: u32,
    symbol: &'a str,
    name: &'a str,
    period: u8,
    column: Column,
    family: Family,
}

pub fn element_list(elements: &[&ElementDescriptor], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<ListRow> = elements
                .iter()
                .map(|e| ListRow {
                    atomic_number: e.atomic_number(),
                    symbol: e.symbol(),
                    name: e.name(),
                    period: e.period(),
                    column: e.column(),
                    family: e.family(),
                })
                .collect();
            Ok(serde_json::to_string_pretty(&rows)?)
        }
        OutputFormat::Text => Ok(elements
            .iter()
            .map(|e| {
                format!(
                    "{:>3}  {:<2}  {:<13}  {}  {:>4}  {}",
                    e.atomic_number(),
                    e.symbol(),
                    e.display_name(),
                    e.period(),
                    e.column().to_string(),
                    e.family()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn columns(columns: &[Column], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(columns)?),
        OutputFormat::Text => Ok(columns
            .iter()
            .map(|column| {
                let group = column
                    .group_number()
                    .map(|g| g.to_string())
                    .unwrap_or_else(|| "-".to_string());
                format!(
                    "{:>4}  {:>5.2}  {:>2}",
                    column.to_string(),
                    column.enumeration(),
                    group
                )
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn families(families: &[Family], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<_> = families
                .iter()
                .map(|f| serde_json::json!({ "family": f, "metallic_state": f.metallic_state() }))
                .collect();
            Ok(serde_json::to_string_pretty(&rows)?)
        }
        OutputFormat::Text => Ok(families
            .iter()
            .map(|family| format!("{:<24} {}", family.to_string(), family.metallic_state()))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iron() -> &'static ElementDescriptor {
        ptable::lookup("Fe").unwrap()
    }

    #[test]
    fn descriptor_text_lists_every_field() {
        let text = descriptor(iron(), OutputFormat::Text).unwrap();
        assert!(text.starts_with("Iron (Fe)\n"));
        assert_eq!(text.lines().count(), 13);
        assert!(!text.ends_with('\n'));
        assert!(text.contains("Column:          8B (8)"));
        assert!(text.contains("Family:          TRANSITION METAL"));
        assert!(text.contains("Electron config: 1s2 2s2-2p6 3s2-3p6 4s2-3d6"));
        assert!(text.contains("Short config:    [Ar] 4s2 3d6"));
        assert!(text.contains("Neutrons:        30"));
    }

    #[test]
    fn descriptor_text_omits_group_for_la_columns() {
        let cerium = ptable::lookup("Ce").unwrap();
        let text = descriptor(cerium, OutputFormat::Text).unwrap();
        assert!(text.contains("Column:          2LA\n"));
    }

    #[test]
    fn descriptor_json_is_parseable() {
        let json = descriptor(iron(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["symbol"], "Fe");
        assert_eq!(value["period"], 4);
        assert_eq!(value["metallic_state"], "METAL");
    }

    #[test]
    fn element_list_renders_one_line_per_element() {
        let elements = vec![ptable::lookup(1u32).unwrap(), iron()];
        let text = element_list(&elements, OutputFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  1  H   Hydrogen"));
        assert!(lines[1].ends_with("TRANSITION METAL"));
    }

    #[test]
    fn element_list_json_keeps_order() {
        let elements = vec![iron(), ptable::lookup(1u32).unwrap()];
        let json = element_list(&elements, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["symbol"], "Fe");
        assert_eq!(value[1]["column"], "1A");
    }

    #[test]
    fn columns_text_shows_enumeration_and_group() {
        let text = columns(&Column::ALL, OutputFormat::Text).unwrap();
        assert_eq!(text.lines().count(), 32);
        assert_eq!(text.lines().next(), Some("  1A   1.00   1"));
        assert!(text.contains(" 3LA   2.03   -"));
    }

    #[test]
    fn families_text_pairs_label_with_metallic_state() {
        let text = families(&Family::ALL, OutputFormat::Text).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "ALKALI METAL             METAL");
        assert_eq!(lines[9], "NOBLE GAS                NONMETAL");
    }

    #[test]
    fn families_json_includes_metallic_state() {
        let json = families(&Family::ALL, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 10);
        assert!(
            value
                .as_array()
                .unwrap()
                .iter()
                .any(|v| v["family"] == "METALLOID" && v["metallic_state"] == "METALLOID")
        );
    }
}
