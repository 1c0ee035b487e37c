use pecaai_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{
        categories::{AddMenuItemRequest, SaveCategoryRequest},
        neighborhoods::SaveNeighborhoodRequest,
    },
    reference::sample_catalog,
    services::{category_service, neighborhood_service},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;
    let state = AppState { orm };

    seed_menu(&state).await?;
    seed_neighborhoods(&state).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_menu(state: &AppState) -> anyhow::Result<()> {
    if !category_service::list_categories(state).await?.is_empty() {
        println!("Menu already present, skipping");
        return Ok(());
    }

    for sample in sample_catalog() {
        let category = category_service::save_category(
            state,
            SaveCategoryRequest {
                id: None,
                name: Some(sample.name),
            },
        )
        .await?;

        for item in sample.items {
            category_service::add_item_to_category(
                state,
                category.id,
                AddMenuItemRequest {
                    name: Some(item.name),
                    price: Some(item.price),
                    description: None,
                },
            )
            .await?;
        }
        println!("Seeded category {:?}", category.name);
    }
    Ok(())
}

async fn seed_neighborhoods(state: &AppState) -> anyhow::Result<()> {
    if !neighborhood_service::list_neighborhoods(state).await?.is_empty() {
        println!("Neighborhoods already present, skipping");
        return Ok(());
    }

    let neighborhoods = vec![
        ("Centro", "São Paulo", 5.0),
        ("Pinheiros", "São Paulo", 7.5),
        ("Cambuí", "Campinas", 6.0),
        ("Gonzaga", "Santos", 8.0),
    ];

    for (name, city, delivery_fee) in neighborhoods {
        neighborhood_service::save_neighborhood(
            state,
            SaveNeighborhoodRequest {
                id: None,
                name: name.to_string(),
                state: "SP".to_string(),
                city: city.to_string(),
                delivery_fee,
                latitude: None,
                longitude: None,
            },
        )
        .await?;
    }

    println!("Seeded neighborhoods");
    Ok(())
}
