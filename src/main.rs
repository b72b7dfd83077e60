#![warn(clippy::pedantic)]

mod config;
mod error;
mod extract;
mod model;
mod repo;
mod route;
mod trace;

use std::str::FromStr;

use sqlx::sqlite::SqliteConnectOptions;

pub type Database = sqlx::Pool<sqlx::Sqlite>;
pub type AppState = State;

/// The shared application state.
///
/// Handlers extract the pieces they need through [`axum::extract::FromRef`],
/// e.g. `State(database): State<Database>`.
#[derive(Clone, axum::extract::FromRef)]
pub struct State {
	pub database: Database,
}

/// Opens the connection pool and brings the schema up to date.
async fn connect(url: &str) -> Result<Database, sqlx::Error> {
	let options = SqliteConnectOptions::from_str(url)?
		.create_if_missing(true)
		.foreign_keys(true);

	let database = Database::connect_with(options).await?;

	sqlx::migrate!().run(&database).await?;

	Ok(database)
}

#[tokio::main]
async fn main() {
	dotenvy::dotenv().ok();

	let config = config::Config::from_env().expect("invalid configuration");

	trace::init_tracing_subscriber(config.log_level);

	let state = State {
		database: connect(&config.database_url)
			.await
			.expect("failed to connect to database"),
	};

	let app = route::router(state);

	let listener = tokio::net::TcpListener::bind((config.host, config.port))
		.await
		.expect("failed to bind to port");

	tracing::info!("listening on {}:{}", config.host, config.port);

	axum::serve(listener, app).await.expect("server error");
}
