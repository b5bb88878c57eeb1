// catalog-client/demos/catalog_demo.rs
// End-to-end walkthrough against a live catalog server

use catalog_client::{ClientConfig, FormField, SyncEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    let base_url = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| "http://localhost:8080".to_string());

    let config = ClientConfig::new(&base_url);
    let mut engine = SyncEngine::connect(&config)?;

    // Compose and submit a draft
    engine.set_field(FormField::Name, "Demo Model");
    engine.set_field(FormField::Developer, "Demo Labs");
    engine.set_field(FormField::Category, "demo");
    engine.set_field(FormField::Tags, "demo, walkthrough , catalog");
    engine.set_field(FormField::Rating, "4.5");
    engine.set_field(FormField::NumberOfReviews, "0");

    match engine.submit_create().await {
        Ok(model) => tracing::info!("Created record {:?}", model.id),
        Err(e) => {
            tracing::error!("Create failed: {}", e);
            if let Some(alert) = &engine.session().alert {
                println!("{alert}");
            }
            return Err(e.into());
        }
    }

    // List the collection
    engine.fetch_all().await?;
    println!("{} record(s) in the catalog:", engine.session().collection.len());
    for (index, model) in engine.session().collection.iter().enumerate() {
        println!(
            "  [{index}] {} by {} (tags: {})",
            model.name,
            model.developer,
            model.tags.display()
        );
    }

    // Rename the first record through the edit workflow
    if !engine.session().collection.is_empty() {
        engine.open_edit(0);
        engine.set_edit_field(FormField::Name, "Demo Model (renamed)");
        match engine.submit_update().await {
            Ok(model) => tracing::info!("Updated record to {:?}", model.name),
            Err(e) => tracing::error!("Update failed: {}", e),
        }
    }

    // Delete it again and show the resynchronized listing
    if let Some(id) = engine
        .session()
        .collection
        .first()
        .and_then(|m| m.id.clone())
    {
        engine.delete_by_id(&id).await?;
        println!(
            "{} record(s) after delete",
            engine.session().collection.len()
        );
    }

    Ok(())
}
