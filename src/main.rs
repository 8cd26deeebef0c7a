use anyhow::{bail, Context};
use chrono::{Days, Local, NaiveDate};
use clap::{Parser, Subcommand};
use comfy_table::Table;
use core_types::{
    NewAnimal, NewBreedingRecord, NewEggProduction, NewFeedRecord, NewFinancialRecord,
    NewHealthRecord, NewMilkProduction, NewVaccination, NewWeightRecord, TransactionType,
};
use database::{connect, run_migrations, DbRepository, RecordFilter};
use reports::ReportGenerator;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// The main entry point for the Farmstead record-keeping application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Load settings, open the database and bring the schema up to date.
    let settings = configuration::load_settings()?;
    let pool = connect(&settings.database.path).await?;
    run_migrations(&pool).await?;
    tracing::info!(db = %settings.database.path, "database ready");
    let repo = DbRepository::new(pool);
    let generator = ReportGenerator::new(&settings.reports.output_dir)?;

    // Execute the appropriate command
    match cli.command {
        Commands::ListAnimals => handle_list_animals(&repo).await?,
        Commands::AddAnimal(args) => handle_add_animal(&repo, args).await?,
        Commands::DeleteAnimal { id } => {
            repo.soft_delete_animal(id).await?;
            println!("Animal {id} marked as Deleted.");
        }
        Commands::AnimalProfile { id } => handle_animal_profile(&repo, &generator, id).await?,
        Commands::HerdReport => {
            let animals = repo.get_all_animals().await?;
            let path = generator.generate_herd_report(&animals)?;
            println!("Report generated: {}", path.display());
        }
        Commands::FinancialReport { from, to } => {
            let filter = RecordFilter {
                start_date: from,
                end_date: to,
                ..RecordFilter::default()
            };
            let records = repo.get_financial_records(&filter).await?;
            let path = generator.generate_financial_report(&records, from.zip(to))?;
            println!("Report generated: {}", path.display());
        }
        Commands::HealthReport { from, to } => {
            let filter = RecordFilter {
                start_date: from,
                end_date: to,
                ..RecordFilter::default()
            };
            let records = repo.get_health_records(&filter).await?;
            let path = generator.generate_health_report(&records, from.zip(to))?;
            println!("Report generated: {}", path.display());
        }
        Commands::BreedingReport => {
            let records = repo.get_all_breeding_records().await?;
            let path = generator.generate_breeding_report(&records)?;
            println!("Report generated: {}", path.display());
        }
        Commands::Seed => handle_seed(&repo, &generator).await?,
        Commands::ExportDb { dest } => {
            std::fs::copy(&settings.database.path, &dest)
                .with_context(|| format!("failed to copy database to {}", dest.display()))?;
            println!("Database exported to {}", dest.display());
        }
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A single-user farm record-keeping application: animals, health, breeding,
/// feeding, weights, finances and production, with DOCX report generation.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all animals on file.
    ListAnimals,
    /// Register a new animal.
    AddAnimal(AddAnimalArgs),
    /// Soft-delete an animal (its history is kept).
    DeleteAnimal {
        #[arg(long)]
        id: i64,
    },
    /// Generate the profile document for one animal.
    AnimalProfile {
        #[arg(long)]
        id: i64,
    },
    /// Generate the herd management report.
    HerdReport,
    /// Generate the financial report, optionally bounded to a date range.
    FinancialReport {
        /// Start of the reporting period (YYYY-MM-DD).
        #[arg(long)]
        from: Option<NaiveDate>,
        /// End of the reporting period (YYYY-MM-DD).
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Generate the health management report, optionally bounded to a date range.
    HealthReport {
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Generate the breeding management report.
    BreedingReport,
    /// Populate the database with example data and sample reports.
    Seed,
    /// Copy the database file to a backup location.
    ExportDb {
        #[arg(long)]
        dest: PathBuf,
    },
}

#[derive(Parser)]
struct AddAnimalArgs {
    /// The farm's unique identifier for the animal (e.g., "C001").
    #[arg(long)]
    tag_number: String,
    #[arg(long)]
    species: String,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    breed: Option<String>,
    #[arg(long)]
    gender: Option<String>,
    #[arg(long)]
    date_of_birth: Option<NaiveDate>,
    #[arg(long)]
    weight: Option<f64>,
    #[arg(long)]
    color: Option<String>,
    #[arg(long)]
    acquisition_date: Option<NaiveDate>,
    #[arg(long)]
    acquisition_type: Option<String>,
    #[arg(long)]
    source: Option<String>,
    #[arg(long)]
    cost: Option<f64>,
    #[arg(long)]
    notes: Option<String>,
}

// ==============================================================================
// Command Handlers
// ==============================================================================

async fn handle_list_animals(repo: &DbRepository) -> anyhow::Result<()> {
    let animals = repo.get_all_animals().await?;

    let mut table = Table::new();
    table.set_header(vec!["ID", "Tag", "Name", "Species", "Breed", "Gender", "Status"]);
    for animal in &animals {
        table.add_row(vec![
            animal.id.to_string(),
            animal.tag_number.clone(),
            animal.name.clone().unwrap_or_default(),
            animal.species.clone(),
            animal.breed.clone().unwrap_or_default(),
            animal.gender.clone().unwrap_or_default(),
            animal.status.to_string(),
        ]);
    }
    println!("{table}");
    println!("{} animals on file.", animals.len());
    Ok(())
}

async fn handle_add_animal(repo: &DbRepository, args: AddAnimalArgs) -> anyhow::Result<()> {
    let new = NewAnimal {
        tag_number: args.tag_number,
        name: args.name,
        species: args.species,
        breed: args.breed,
        gender: args.gender,
        date_of_birth: args.date_of_birth,
        weight: args.weight,
        color: args.color,
        acquisition_date: args.acquisition_date,
        acquisition_type: args.acquisition_type,
        source: args.source,
        cost: args.cost,
        notes: args.notes,
    };
    let id = repo.add_animal(&new).await?;
    println!("Animal added with id {id}.");
    Ok(())
}

async fn handle_animal_profile(
    repo: &DbRepository,
    generator: &ReportGenerator,
    animal_id: i64,
) -> anyhow::Result<()> {
    let Some(animal) = repo.get_animal(animal_id).await? else {
        bail!("no animal with id {animal_id}");
    };
    let health_records = repo.get_health_records_by_animal(animal_id).await?;
    let vaccinations = repo.get_vaccinations_by_animal(animal_id).await?;
    let weight_records = repo.get_weight_records_by_animal(animal_id).await?;

    let path =
        generator.generate_animal_profile(&animal, &health_records, &vaccinations, &weight_records)?;
    println!("Report generated: {}", path.display());
    Ok(())
}

// ==============================================================================
// Demo Data
// ==============================================================================

/// Populates the store with a small example farm through the same public
/// repository contract as any other caller, then generates the three sample
/// reports so new users have something to look at.
async fn handle_seed(repo: &DbRepository, generator: &ReportGenerator) -> anyhow::Result<()> {
    println!("Creating sample animals...");
    let animals = demo_animals();
    let mut ids = Vec::new();
    for animal in &animals {
        let id = repo.add_animal(animal).await?;
        println!("  Added {} ({})", animal.name.as_deref().unwrap_or("-"), animal.tag_number);
        ids.push(id);
    }
    let [bessie, daisy, max, fluffy, _hamlet, henrietta] = ids[..] else {
        bail!("unexpected demo animal count");
    };

    println!("Creating sample health records...");
    let health = vec![
        NewHealthRecord {
            animal_id: bessie,
            record_date: date(2024, 1, 15),
            record_type: "Vaccination".into(),
            diagnosis: Some("Routine vaccination".into()),
            treatment: Some("Administered FMD vaccine".into()),
            medications: Some("FMD Vaccine".into()),
            dosage: Some("2ml subcutaneous".into()),
            veterinarian: Some("Dr. Sarah Johnson".into()),
            cost: Some(25.0),
            notes: Some("No adverse reactions".into()),
            ..NewHealthRecord::default()
        },
        NewHealthRecord {
            animal_id: bessie,
            record_date: date(2024, 2, 20),
            record_type: "Checkup".into(),
            diagnosis: Some("Healthy, pregnancy confirmed".into()),
            treatment: Some("Prenatal vitamins prescribed".into()),
            medications: Some("Prenatal vitamins".into()),
            dosage: Some("1 tablet daily".into()),
            veterinarian: Some("Dr. Sarah Johnson".into()),
            cost: Some(50.0),
            notes: Some("Expected delivery in 6 months".into()),
            ..NewHealthRecord::default()
        },
        NewHealthRecord {
            animal_id: daisy,
            record_date: date(2024, 1, 10),
            record_type: "Treatment".into(),
            diagnosis: Some("Mild mastitis in rear left quarter".into()),
            symptoms: Some("Swelling, reduced milk yield, slight fever".into()),
            treatment: Some("Antibiotic treatment for 5 days".into()),
            medications: Some("Penicillin".into()),
            dosage: Some("10ml intramuscular once daily".into()),
            veterinarian: Some("Dr. Michael Chen".into()),
            cost: Some(75.0),
            notes: Some("Milk withdrawal period: 7 days".into()),
            ..NewHealthRecord::default()
        },
        NewHealthRecord {
            animal_id: fluffy,
            record_date: date(2024, 3, 1),
            record_type: "Vaccination".into(),
            diagnosis: Some("Routine vaccination".into()),
            treatment: Some("Administered clostridial vaccine".into()),
            medications: Some("CDT Vaccine".into()),
            dosage: Some("2ml subcutaneous".into()),
            veterinarian: Some("Dr. Sarah Johnson".into()),
            cost: Some(15.0),
            notes: Some("Booster due in 1 year".into()),
            ..NewHealthRecord::default()
        },
    ];
    for record in &health {
        repo.add_health_record(record).await?;
    }

    println!("Creating vaccination records...");
    for animal_id in [bessie, daisy, max] {
        repo.add_vaccination(&NewVaccination {
            animal_id,
            vaccine_name: "FMD (Foot and Mouth Disease)".into(),
            vaccination_date: date(2024, 1, 15),
            batch_number: Some("FMD-2024-A123".into()),
            next_due_date: Some(date(2025, 1, 15)),
            veterinarian: Some("Dr. Sarah Johnson".into()),
            cost: Some(25.0),
            notes: None,
        })
        .await?;
    }

    println!("Creating breeding records...");
    repo.add_breeding_record(&NewBreedingRecord {
        dam_id: bessie,
        sire_id: Some(max),
        breeding_date: date(2024, 2, 14),
        breeding_method: Some("Natural".into()),
        expected_delivery: Some(date(2024, 11, 20)),
        success: Some(true),
        notes: Some("First breeding, observed natural mating".into()),
        ..NewBreedingRecord::default()
    })
    .await?;
    repo.add_breeding_record(&NewBreedingRecord {
        dam_id: daisy,
        sire_id: Some(max),
        breeding_date: date(2024, 3, 1),
        breeding_method: Some("Artificial Insemination".into()),
        expected_delivery: Some(date(2024, 12, 5)),
        notes: Some("Used high-quality semen, pregnancy to be confirmed".into()),
        ..NewBreedingRecord::default()
    })
    .await?;

    println!("Creating feed records for the last 7 days...");
    let today = Local::now().date_naive();
    for i in 0..7u64 {
        let record_date = today - Days::new(i);
        repo.add_feed_record(&NewFeedRecord {
            record_date,
            animal_id: Some(bessie),
            feed_type: "Hay".into(),
            quantity: 15.0,
            unit: Some("kg".into()),
            cost: Some(7.5),
            supplier: Some("Green Valley Feed".into()),
            notes: None,
        })
        .await?;
        repo.add_feed_record(&NewFeedRecord {
            record_date,
            animal_id: Some(daisy),
            feed_type: "Silage".into(),
            quantity: 20.0,
            unit: Some("kg".into()),
            cost: Some(10.0),
            supplier: Some("Local Co-op".into()),
            notes: None,
        })
        .await?;
        // Herd-wide feeding event: no animal id.
        repo.add_feed_record(&NewFeedRecord {
            record_date,
            animal_id: None,
            feed_type: "Grain".into(),
            quantity: 50.0,
            unit: Some("kg".into()),
            cost: Some(35.0),
            supplier: Some("Farm Supply Store".into()),
            notes: Some("Bulk purchase for all animals".into()),
        })
        .await?;
    }

    println!("Creating weight tracking records...");
    let weights = [
        (bessie, date(2024, 1, 1), 530.0, Some(3.0), Some("Good condition")),
        (bessie, date(2024, 2, 1), 540.0, Some(3.5), Some("Gaining well")),
        (bessie, date(2024, 3, 1), 550.0, Some(3.5), Some("Pregnant, good weight gain")),
        (daisy, date(2024, 1, 1), 410.0, Some(3.0), None),
        (daisy, date(2024, 3, 1), 420.0, Some(3.0), None),
    ];
    for (animal_id, weight_date, weight, score, notes) in weights {
        repo.add_weight_record(&NewWeightRecord {
            animal_id,
            weight_date,
            weight,
            body_condition_score: score,
            notes: notes.map(str::to_string),
        })
        .await?;
    }

    println!("Creating financial records...");
    let transactions = [
        (date(2024, 1, 15), TransactionType::Expense, "Veterinary", 190.0, "Vaccination for all cattle"),
        (date(2024, 2, 1), TransactionType::Expense, "Feed", 500.0, "Monthly feed purchase"),
        (date(2024, 2, 15), TransactionType::Income, "Sales", 850.0, "Milk sales - February"),
        (date(2024, 3, 1), TransactionType::Expense, "Feed", 480.0, "Monthly feed purchase"),
        (date(2024, 3, 10), TransactionType::Income, "Sales", 200.0, "Wool sales from sheep shearing"),
    ];
    for (transaction_date, transaction_type, category, amount, description) in transactions {
        repo.add_financial_record(&NewFinancialRecord {
            transaction_date,
            transaction_type,
            category: Some(category.into()),
            amount,
            description: Some(description.into()),
            animal_id: None,
            payment_method: Some("Bank Transfer".into()),
            notes: None,
        })
        .await?;
    }

    println!("Creating milk production records for the last 30 days...");
    for i in 0..30u64 {
        let production_date = today - Days::new(i);
        for (animal_id, morning, evening) in [(bessie, 12.5, 11.0), (daisy, 10.0, 9.5)] {
            repo.add_milk_production(&NewMilkProduction {
                animal_id,
                production_date,
                morning_yield: Some(morning),
                evening_yield: Some(evening),
                // Caller-computed; the store never derives it.
                total_yield: Some(morning + evening),
                quality_grade: Some("A".into()),
                ..NewMilkProduction::default()
            })
            .await?;
        }
    }

    println!("Creating egg production records for the last 14 days...");
    for i in 0..14u64 {
        repo.add_egg_production(&NewEggProduction {
            production_date: today - Days::new(i),
            flock_id: Some(henrietta),
            eggs_collected: Some(42),
            eggs_broken: Some(2),
            eggs_sold: Some(36),
            price_per_egg: Some(0.25),
            notes: None,
        })
        .await?;
    }

    println!("Generating sample reports...");
    let animal = repo
        .get_animal(bessie)
        .await?
        .context("demo animal vanished")?;
    let health_records = repo.get_health_records_by_animal(bessie).await?;
    let vaccinations = repo.get_vaccinations_by_animal(bessie).await?;
    let weight_records = repo.get_weight_records_by_animal(bessie).await?;
    let profile =
        generator.generate_animal_profile(&animal, &health_records, &vaccinations, &weight_records)?;
    println!("  Generated animal profile: {}", profile.display());

    let herd = generator.generate_herd_report(&repo.get_all_animals().await?)?;
    println!("  Generated herd report: {}", herd.display());

    let financials = repo.get_financial_records(&RecordFilter::default()).await?;
    let financial = generator.generate_financial_report(&financials, None)?;
    println!("  Generated financial report: {}", financial.display());

    println!("Demo data creation complete.");
    Ok(())
}

fn demo_animals() -> Vec<NewAnimal> {
    vec![
        NewAnimal {
            tag_number: "C001".into(),
            name: Some("Bessie".into()),
            species: "Cattle".into(),
            breed: Some("Holstein".into()),
            gender: Some("Female".into()),
            date_of_birth: Some(date(2020, 1, 15)),
            weight: Some(550.0),
            color: Some("Black and White".into()),
            acquisition_date: Some(date(2020, 2, 1)),
            acquisition_type: Some("Purchase".into()),
            source: Some("Green Valley Farm".into()),
            cost: Some(1500.0),
            notes: Some("Excellent milk producer, calm temperament".into()),
        },
        NewAnimal {
            tag_number: "C002".into(),
            name: Some("Daisy".into()),
            species: "Cattle".into(),
            breed: Some("Jersey".into()),
            gender: Some("Female".into()),
            date_of_birth: Some(date(2019, 3, 20)),
            weight: Some(420.0),
            color: Some("Light Brown".into()),
            acquisition_date: Some(date(2019, 4, 15)),
            acquisition_type: Some("Purchase".into()),
            source: Some("Meadow Farm".into()),
            cost: Some(1200.0),
            notes: Some("High butterfat content in milk".into()),
        },
        NewAnimal {
            tag_number: "C003".into(),
            name: Some("Max".into()),
            species: "Cattle".into(),
            breed: Some("Angus".into()),
            gender: Some("Male".into()),
            date_of_birth: Some(date(2021, 5, 10)),
            weight: Some(650.0),
            color: Some("Black".into()),
            acquisition_date: Some(date(2021, 6, 1)),
            acquisition_type: Some("Purchase".into()),
            source: Some("Prime Beef Farm".into()),
            cost: Some(2000.0),
            notes: Some("Prime breeding bull, excellent genetics".into()),
        },
        NewAnimal {
            tag_number: "S001".into(),
            name: Some("Fluffy".into()),
            species: "Sheep".into(),
            breed: Some("Merino".into()),
            gender: Some("Female".into()),
            date_of_birth: Some(date(2021, 9, 12)),
            weight: Some(65.0),
            color: Some("White".into()),
            acquisition_date: Some(date(2021, 10, 1)),
            acquisition_type: Some("Purchase".into()),
            source: Some("Wool Masters".into()),
            cost: Some(250.0),
            notes: Some("High-quality wool producer".into()),
        },
        NewAnimal {
            tag_number: "P001".into(),
            name: Some("Hamlet".into()),
            species: "Pig".into(),
            breed: Some("Yorkshire".into()),
            gender: Some("Male".into()),
            date_of_birth: Some(date(2023, 1, 15)),
            weight: Some(180.0),
            color: Some("Pink".into()),
            acquisition_date: Some(date(2023, 2, 1)),
            acquisition_type: Some("Birth".into()),
            source: Some("On Farm".into()),
            cost: Some(0.0),
            notes: Some("Born on farm, good growth rate".into()),
        },
        NewAnimal {
            tag_number: "F001".into(),
            name: Some("Henrietta's Flock".into()),
            species: "Chicken".into(),
            breed: Some("Rhode Island Red".into()),
            gender: Some("Female".into()),
            date_of_birth: Some(date(2023, 4, 2)),
            weight: Some(2.5),
            color: Some("Red-Brown".into()),
            acquisition_date: Some(date(2023, 5, 1)),
            acquisition_type: Some("Purchase".into()),
            source: Some("Hillside Hatchery".into()),
            cost: Some(120.0),
            notes: Some("Laying flock, tracked as a single entry".into()),
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid demo date")
}
