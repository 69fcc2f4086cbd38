use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;
use nomad_auth::UserRole;
use nomad_cli::seeder::{self, SeedConfig};
use sqlx::postgres::{PgPool, PgPoolOptions};

#[derive(Parser)]
#[command(name = "nomad-cli")]
#[command(about = "Barefoot Nomad CLI - Administrative tools for Barefoot Nomad", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a verified super admin account
    CreateSuperAdmin {
        /// First name of the super admin
        #[arg(short = 'f', long)]
        first_name: Option<String>,

        /// Last name of the super admin
        #[arg(short = 'l', long)]
        last_name: Option<String>,

        /// Email address
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Seed the database with fake users and facilities
    Seed {
        /// Number of requesters to create
        #[arg(short = 'u', long, default_value = "20")]
        users: usize,

        /// Number of travel admins to create
        #[arg(long, default_value = "3")]
        travel_admins: usize,

        /// Number of facilities per travel admin
        #[arg(long, default_value = "5")]
        facilities: usize,
    },
    /// Clear all seeded users and their facilities (keeps real accounts)
    ClearSeed,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let pool = match connect().await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::CreateSuperAdmin {
            first_name,
            last_name,
            email,
            password,
        } => handle_create_super_admin(&pool, first_name, last_name, email, password).await,
        Commands::Seed {
            users,
            travel_admins,
            facilities,
        } => handle_seed(&pool, users, travel_admins, facilities).await,
        Commands::ClearSeed => handle_clear_seed(&pool).await,
    }
}

async fn connect() -> Result<PgPool, Box<dyn std::error::Error>> {
    let database_url = std::env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    Ok(pool)
}

struct AdminDetails {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
}

fn prompt_missing(
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> Result<AdminDetails, dialoguer::Error> {
    let first_name = match first_name {
        Some(v) => v,
        None => Input::new().with_prompt("First name").interact_text()?,
    };

    let last_name = match last_name {
        Some(v) => v,
        None => Input::new().with_prompt("Last name").interact_text()?,
    };

    let email = match email {
        Some(v) => v,
        None => Input::new().with_prompt("Email address").interact_text()?,
    };

    let password = match password {
        Some(v) => v,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()?,
    };

    Ok(AdminDetails {
        first_name,
        last_name,
        email: email.trim().to_lowercase(),
        password,
    })
}

async fn handle_create_super_admin(
    pool: &PgPool,
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    password: Option<String>,
) {
    let details = match prompt_missing(first_name, last_name, email, password) {
        Ok(details) => details,
        Err(e) => {
            eprintln!("\n❌ Failed to read input: {}", e);
            std::process::exit(1);
        }
    };

    match create_super_admin(pool, &details).await {
        Ok(_) => {
            println!("\n✅ Super admin created successfully!");
            println!("   Email: {}", details.email);
            println!("   Name: {} {}", details.first_name, details.last_name);
        }
        Err(e) => {
            eprintln!("\n❌ Error creating super admin: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed(pool: &PgPool, users: usize, travel_admins: usize, facilities: usize) {
    let config = SeedConfig::new(users)
        .with_travel_admins(travel_admins)
        .with_facilities(facilities);

    if let Err(e) = seeder::seed_all(pool, config).await {
        eprintln!("\n❌ Error seeding database: {}", e);
        std::process::exit(1);
    }
}

async fn handle_clear_seed(pool: &PgPool) {
    if let Err(e) = seeder::clear_all(pool).await {
        eprintln!("\n❌ Error clearing seeded data: {}", e);
        std::process::exit(1);
    }
}

async fn create_super_admin(
    db: &PgPool,
    details: &AdminDetails,
) -> Result<(), Box<dyn std::error::Error>> {
    let hashed_password = nomad_core::hash_password(&details.password)
        .map_err(|e| format!("Failed to hash password: {}", e.error))?;

    let user_id = sqlx::query_scalar::<_, uuid::Uuid>(
        "INSERT INTO users (first_name, last_name, email, password, role, is_verified)
         VALUES ($1, $2, $3, $4, $5, TRUE)
         ON CONFLICT (email) DO NOTHING
         RETURNING id",
    )
    .bind(&details.first_name)
    .bind(&details.last_name)
    .bind(&details.email)
    .bind(&hashed_password)
    .bind(UserRole::SuperAdmin)
    .fetch_optional(db)
    .await?;

    match user_id {
        Some(_) => Ok(()),
        None => Err("User with this email already exists".into()),
    }
}
