use schemars::schema_for;
use stacks_core::{RestoreSnapshot, ResultItem, SearchStatus};
use stacks_nav::View;

use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::cli::{GlobalFlags, OutputFormat};

/// JSON schema for one of the renderer-facing types.
pub fn schema_json(kind: SchemaType) -> anyhow::Result<serde_json::Value> {
    let schema = match kind {
        SchemaType::View => schema_for!(View),
        SchemaType::ResultItem => schema_for!(ResultItem),
        SchemaType::Snapshot => schema_for!(RestoreSnapshot),
        SchemaType::Status => schema_for!(SearchStatus),
    };
    Ok(serde_json::to_value(schema)?)
}

/// Handle `stacks schema`. Schemas are always JSON; `raw` makes it compact.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_json(args.type_name)?;
    let rendered = if flags.format == OutputFormat::Raw {
        serde_json::to_string(&schema)?
    } else {
        serde_json::to_string_pretty(&schema)?
    };
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_schema_names_its_fields() {
        let schema = schema_json(SchemaType::View).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for field in ["screen", "results", "status", "sign_in_prompt"] {
            assert!(properties.contains_key(field), "missing {field}");
        }
    }

    #[test]
    fn every_kind_produces_an_object_schema() {
        for kind in [
            SchemaType::View,
            SchemaType::ResultItem,
            SchemaType::Snapshot,
            SchemaType::Status,
        ] {
            assert!(schema_json(kind).unwrap().is_object());
        }
    }
}
