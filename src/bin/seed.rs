use print_connect::{
    config::AppConfig,
    db::{DbPool, create_pool, run_migrations},
};

struct SeedProvider {
    id: i64,
    name: &'static str,
    distance: f64,
    rating: f64,
    avatar_url: Option<&'static str>,
    is_business: bool,
    motto: Option<&'static str>,
}

const PROVIDERS: &[SeedProvider] = &[
    SeedProvider {
        id: 1,
        name: "Officina Additiva",
        distance: 1.2,
        rating: 4.8,
        avatar_url: Some("https://i.pravatar.cc/150?u=officina-additiva"),
        is_business: true,
        motto: Some("Prototipi rapidi, qualità industriale"),
    },
    SeedProvider {
        id: 2,
        name: "Marco Rossi",
        distance: 3.5,
        rating: 4.5,
        avatar_url: Some("https://i.pravatar.cc/150?u=marco-rossi"),
        is_business: false,
        motto: Some("Stampo le tue idee nel weekend"),
    },
    SeedProvider {
        id: 3,
        name: "LayerLab",
        distance: 7.9,
        rating: 4.2,
        avatar_url: None,
        is_business: true,
        motto: None,
    },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url, 1).await?;
    // Ensure migrations are applied.
    run_migrations(&pool).await?;

    let inserted = seed_providers(&pool).await?;
    println!("Seed completed. {inserted} new providers");
    Ok(())
}

async fn seed_providers(pool: &DbPool) -> anyhow::Result<u64> {
    let mut inserted = 0;
    for p in PROVIDERS {
        let result = sqlx::query(
            r#"
            INSERT INTO providers (id, name, distance, rating, avatar_url, is_business, motto)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(p.id)
        .bind(p.name)
        .bind(p.distance)
        .bind(p.rating)
        .bind(p.avatar_url)
        .bind(p.is_business)
        .bind(p.motto)
        .execute(pool)
        .await?;
        inserted += result.rows_affected();
        println!("Ensured provider {} ({})", p.id, p.name);
    }
    Ok(inserted)
}
