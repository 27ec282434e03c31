use sqlx::postgres::PgPool;

use crate::integration::imgbb::{ImgbbClient, IMGBB_URL};

#[derive(Clone)]
pub struct AppData {
    db: PgPool,
    imgbb_key: String,
    imgbb_url: String,
    port: u16,
    debug: bool,
}

pub async fn build_config() -> anyhow::Result<AppData> {
    let env_url = dotenvy::var("DATABASE_URL")?;

    let pool = sqlx::postgres::PgPoolOptions::default()
        .max_connections(10)
        .connect(&env_url)
        .await?;
    let port = dotenvy::var("PORT").map_or(8080, |x: String| x.parse::<u16>().unwrap_or(8080));
    let debug = dotenvy::var("APP_DEBUG").unwrap_or("0".to_string()) == "1";
    let imgbb_key = dotenvy::var("IMGBB_API_KEY").unwrap_or("".to_string());
    let imgbb_url = dotenvy::var("IMGBB_URL").unwrap_or(IMGBB_URL.to_string());

    Ok(AppData {
        db: pool,
        imgbb_key,
        imgbb_url,
        port,
        debug,
    })
}

impl AppData {
    pub fn db(&self) -> &PgPool {
        &self.db
    }

    pub fn image_host(&self) -> ImgbbClient {
        ImgbbClient::new(&self.imgbb_key, &self.imgbb_url)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn debug(&self) -> bool {
        self.debug
    }
}
