// ============================================================================
// Basic Usage Example
// ============================================================================

use picture_fields::prelude::*;
use std::sync::Arc;

fn main() -> DataResult<()> {
    println!("=== Picture Fields Example ===\n");

    // Local fields of every category
    let fields = [
        FieldConfig::numeric("WS-AMOUNT", 5, 2, true).with_value("-123.456"),
        FieldConfig::alphanumeric("WS-CODE", 6).with_value("AB-12"),
        FieldConfig::alphabetic("WS-NAME", 10).with_value("SMITH"),
        FieldConfig::national("WS-CITY", 6).with_value("Zürich"),
        FieldConfig::boolean("WS-FLAGS", 4).with_value("1"),
    ];

    println!("Local fields:");
    for config in &fields {
        let item = create_item(config)?;
        println!(
            "  {:<10} {:<12} [{}]",
            config.name,
            item.category().name(),
            item.display_value()
        );
    }

    // Declaration errors
    println!("\nRejected declarations:");
    for config in [
        FieldConfig::alphabetic("WS-BAD-NAME", 4).with_value("R2D2"),
        FieldConfig::boolean("WS-BAD-FLAG", 3).with_value("012"),
    ] {
        if let Err(err) = create_item(&config) {
            println!("  {}: {}", config.name, err);
        }
    }

    // Two programs sharing one external item
    println!("\nExternal storage:");
    let registry = ExternalRegistry::with_event_handler(Arc::new(LoggingEventHandler));

    let mut writer = FieldBuilder::new("PGM-A-STATUS")
        .alphanumeric(8)
        .with_value("READY")
        .with_external_name("RUN-STATUS")
        .build(&registry)?;
    let mut reader = FieldBuilder::new("PGM-B-STATUS")
        .alphanumeric(8)
        .with_external_name("RUN-STATUS")
        .build(&registry)?;

    println!("  reader sees [{}]", reader.formatted());

    writer.set_value("RUNNING")?;
    if let Field::External(field) = &mut reader {
        field.load()?;
    }
    println!("  after write [{}]", reader.formatted());

    match registry.resolve("RUN-STATUS", 16) {
        Ok(_) => println!("  unexpected resize"),
        Err(err) => println!("  {}", err),
    }

    println!("\nRegistry: {:?}", registry);

    Ok(())
}
