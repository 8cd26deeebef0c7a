use crate::error::DbError;
use chrono::NaiveDate;
use core_types::{
    Animal, AnimalPatch, BreedingRecord, EggProduction, FeedRecord, FinancialRecord, HealthRecord,
    HealthRecordPatch, MilkProduction, NewAnimal, NewBreedingRecord, NewEggProduction,
    NewFeedRecord, NewFinancialRecord, NewHealthRecord, NewMilkProduction, NewOffspring,
    NewVaccination, NewWeightRecord, Offspring, Vaccination, WeightRecord,
};
use sqlx::sqlite::SqlitePool;
use tracing::debug;

/// The `DbRepository` provides a high-level, application-specific interface
/// to the database. It encapsulates all SQL queries and data access logic.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: SqlitePool,
}

/// Optional constraints for the list accessors: equality on the owning
/// animal (or flock) id plus an inclusive date range. Omitted fields mean
/// "no constraint".
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordFilter {
    pub animal_id: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl RecordFilter {
    /// Appends the WHERE fragments this filter contributes to `sql`, using
    /// `date_column` for the range bounds. Bind order is animal id, start,
    /// end; callers must bind in the same order.
    fn push_clauses(&self, sql: &mut String, id_column: &str, date_column: &str) {
        if self.animal_id.is_some() {
            sql.push_str(&format!(" AND {id_column} = ?"));
        }
        if self.start_date.is_some() {
            sql.push_str(&format!(" AND {date_column} >= ?"));
        }
        if self.end_date.is_some() {
            sql.push_str(&format!(" AND {date_column} <= ?"));
        }
    }
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==========================================================================
    // Animals
    // ==========================================================================

    /// Inserts a new animal and returns its store-assigned id.
    ///
    /// Fails with `DbError::ConstraintViolation` when the tag number is
    /// already taken; tag uniqueness spans deleted animals too.
    pub async fn add_animal(&self, new: &NewAnimal) -> Result<i64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO animals (
                tag_number, name, species, breed, gender, date_of_birth, weight,
                color, acquisition_date, acquisition_type, source, cost, notes
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new.tag_number)
        .bind(&new.name)
        .bind(&new.species)
        .bind(&new.breed)
        .bind(&new.gender)
        .bind(new.date_of_birth)
        .bind(new.weight)
        .bind(&new.color)
        .bind(new.acquisition_date)
        .bind(&new.acquisition_type)
        .bind(&new.source)
        .bind(new.cost)
        .bind(&new.notes)
        .execute(&self.pool)
        .await
        .map_err(DbError::from_sqlx)?;

        debug!(tag = %new.tag_number, id = result.last_insert_rowid(), "animal added");
        Ok(result.last_insert_rowid())
    }

    /// Fetches all animals ordered by tag number.
    pub async fn get_all_animals(&self) -> Result<Vec<Animal>, DbError> {
        let animals = sqlx::query_as::<_, Animal>("SELECT * FROM animals ORDER BY tag_number")
            .fetch_all(&self.pool)
            .await
            .map_err(DbError::from_sqlx)?;
        Ok(animals)
    }

    /// Fetches a single animal; absence is a normal result, not an error.
    pub async fn get_animal(&self, animal_id: i64) -> Result<Option<Animal>, DbError> {
        let animal = sqlx::query_as::<_, Animal>("SELECT * FROM animals WHERE id = ?")
            .bind(animal_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(DbError::from_sqlx)?;
        Ok(animal)
    }

    /// Applies a partial update and refreshes the `updated_at` stamp.
    ///
    /// Returns `DbError::NotFound` when no animal has the given id, so a
    /// caller can tell an applied update apart from a no-op.
    pub async fn update_animal(&self, animal_id: i64, patch: &AnimalPatch) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE animals SET
                tag_number = COALESCE(?, tag_number),
                name = COALESCE(?, name),
                species = COALESCE(?, species),
                breed = COALESCE(?, breed),
                gender = COALESCE(?, gender),
                date_of_birth = COALESCE(?, date_of_birth),
                weight = COALESCE(?, weight),
                color = COALESCE(?, color),
                acquisition_date = COALESCE(?, acquisition_date),
                acquisition_type = COALESCE(?, acquisition_type),
                source = COALESCE(?, source),
                cost = COALESCE(?, cost),
                notes = COALESCE(?, notes),
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ?
            "#,
        )
        .bind(&patch.tag_number)
        .bind(&patch.name)
        .bind(&patch.species)
        .bind(&patch.breed)
        .bind(&patch.gender)
        .bind(patch.date_of_birth)
        .bind(patch.weight)
        .bind(&patch.color)
        .bind(patch.acquisition_date)
        .bind(&patch.acquisition_type)
        .bind(&patch.source)
        .bind(patch.cost)
        .bind(&patch.notes)
        .bind(animal_id)
        .execute(&self.pool)
        .await
        .map_err(DbError::from_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }
        Ok(())
    }

    /// Soft-deletes an animal by flipping its status to `Deleted`. Idempotent:
    /// deleting an already-deleted animal succeeds and leaves it deleted.
    /// History rows referencing the animal are untouched.
    pub async fn soft_delete_animal(&self, animal_id: i64) -> Result<(), DbError> {
        let result = sqlx::query("UPDATE animals SET status = 'Deleted' WHERE id = ?")
            .bind(animal_id)
            .execute(&self.pool)
            .await
            .map_err(DbError::from_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }
        debug!(id = animal_id, "animal soft-deleted");
        Ok(())
    }

    // ==========================================================================
    // Health records
    // ==========================================================================

    pub async fn add_health_record(&self, new: &NewHealthRecord) -> Result<i64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO health_records (
                animal_id, record_date, record_type, diagnosis, symptoms,
                treatment, medications, dosage, veterinarian, next_checkup,
                cost, notes
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(new.animal_id)
        .bind(new.record_date)
        .bind(&new.record_type)
        .bind(&new.diagnosis)
        .bind(&new.symptoms)
        .bind(&new.treatment)
        .bind(&new.medications)
        .bind(&new.dosage)
        .bind(&new.veterinarian)
        .bind(new.next_checkup)
        .bind(new.cost)
        .bind(&new.notes)
        .execute(&self.pool)
        .await
        .map_err(DbError::from_sqlx)?;
        Ok(result.last_insert_rowid())
    }

    /// All health records for one animal, most recent first.
    pub async fn get_health_records_by_animal(
        &self,
        animal_id: i64,
    ) -> Result<Vec<HealthRecord>, DbError> {
        let records = sqlx::query_as::<_, HealthRecord>(
            "SELECT * FROM health_records WHERE animal_id = ? ORDER BY record_date DESC",
        )
        .bind(animal_id)
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::from_sqlx)?;
        Ok(records)
    }

    /// Health records across the whole herd, filterable by animal and date
    /// range, most recent first.
    pub async fn get_health_records(
        &self,
        filter: &RecordFilter,
    ) -> Result<Vec<HealthRecord>, DbError> {
        let mut sql = String::from("SELECT * FROM health_records WHERE 1=1");
        filter.push_clauses(&mut sql, "animal_id", "record_date");
        sql.push_str(" ORDER BY record_date DESC");

        let mut query = sqlx::query_as::<_, HealthRecord>(&sql);
        if let Some(id) = filter.animal_id {
            query = query.bind(id);
        }
        if let Some(start) = filter.start_date {
            query = query.bind(start);
        }
        if let Some(end) = filter.end_date {
            query = query.bind(end);
        }
        let records = query
            .fetch_all(&self.pool)
            .await
            .map_err(DbError::from_sqlx)?;
        Ok(records)
    }

    /// Full-field update of a health record; `NotFound` for an unknown id.
    pub async fn update_health_record(
        &self,
        record_id: i64,
        patch: &HealthRecordPatch,
    ) -> Result<(), DbError> {
        let result = sqlx::query(
            r#"
            UPDATE health_records SET
                record_date = COALESCE(?, record_date),
                record_type = COALESCE(?, record_type),
                diagnosis = COALESCE(?, diagnosis),
                symptoms = COALESCE(?, symptoms),
                treatment = COALESCE(?, treatment),
                medications = COALESCE(?, medications),
                dosage = COALESCE(?, dosage),
                veterinarian = COALESCE(?, veterinarian),
                next_checkup = COALESCE(?, next_checkup),
                cost = COALESCE(?, cost),
                notes = COALESCE(?, notes)
            WHERE id = ?
            "#,
        )
        .bind(patch.record_date)
        .bind(&patch.record_type)
        .bind(&patch.diagnosis)
        .bind(&patch.symptoms)
        .bind(&patch.treatment)
        .bind(&patch.medications)
        .bind(&patch.dosage)
        .bind(&patch.veterinarian)
        .bind(patch.next_checkup)
        .bind(patch.cost)
        .bind(&patch.notes)
        .bind(record_id)
        .execute(&self.pool)
        .await
        .map_err(DbError::from_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound);
        }
        Ok(())
    }

    // ==========================================================================
    // Vaccinations
    // ==========================================================================

    pub async fn add_vaccination(&self, new: &NewVaccination) -> Result<i64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO vaccinations (
                animal_id, vaccine_name, vaccination_date, batch_number,
                next_due_date, veterinarian, cost, notes
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(new.animal_id)
        .bind(&new.vaccine_name)
        .bind(new.vaccination_date)
        .bind(&new.batch_number)
        .bind(new.next_due_date)
        .bind(&new.veterinarian)
        .bind(new.cost)
        .bind(&new.notes)
        .execute(&self.pool)
        .await
        .map_err(DbError::from_sqlx)?;
        Ok(result.last_insert_rowid())
    }

    /// All vaccinations for one animal, most recent first.
    pub async fn get_vaccinations_by_animal(
        &self,
        animal_id: i64,
    ) -> Result<Vec<Vaccination>, DbError> {
        let records = sqlx::query_as::<_, Vaccination>(
            "SELECT * FROM vaccinations WHERE animal_id = ? ORDER BY vaccination_date DESC",
        )
        .bind(animal_id)
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::from_sqlx)?;
        Ok(records)
    }

    // ==========================================================================
    // Breeding records and offspring
    // ==========================================================================

    pub async fn add_breeding_record(&self, new: &NewBreedingRecord) -> Result<i64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO breeding_records (
                dam_id, sire_id, breeding_date, breeding_method, expected_delivery,
                actual_delivery, number_of_offspring, complications, success, notes
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(new.dam_id)
        .bind(new.sire_id)
        .bind(new.breeding_date)
        .bind(&new.breeding_method)
        .bind(new.expected_delivery)
        .bind(new.actual_delivery)
        .bind(new.number_of_offspring)
        .bind(&new.complications)
        .bind(new.success)
        .bind(&new.notes)
        .execute(&self.pool)
        .await
        .map_err(DbError::from_sqlx)?;
        Ok(result.last_insert_rowid())
    }

    /// Breeding records where the animal served as either dam or sire,
    /// most recent first.
    pub async fn get_breeding_records_by_animal(
        &self,
        animal_id: i64,
    ) -> Result<Vec<BreedingRecord>, DbError> {
        let records = sqlx::query_as::<_, BreedingRecord>(
            "SELECT * FROM breeding_records WHERE dam_id = ? OR sire_id = ? \
             ORDER BY breeding_date DESC",
        )
        .bind(animal_id)
        .bind(animal_id)
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::from_sqlx)?;
        Ok(records)
    }

    /// Every breeding record on file, most recent first.
    pub async fn get_all_breeding_records(&self) -> Result<Vec<BreedingRecord>, DbError> {
        let records = sqlx::query_as::<_, BreedingRecord>(
            "SELECT * FROM breeding_records ORDER BY breeding_date DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::from_sqlx)?;
        Ok(records)
    }

    pub async fn add_offspring(&self, new: &NewOffspring) -> Result<i64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO offspring (breeding_record_id, animal_id, birth_weight, birth_status)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(new.breeding_record_id)
        .bind(new.animal_id)
        .bind(new.birth_weight)
        .bind(&new.birth_status)
        .execute(&self.pool)
        .await
        .map_err(DbError::from_sqlx)?;
        Ok(result.last_insert_rowid())
    }

    pub async fn get_offspring_by_breeding_record(
        &self,
        breeding_record_id: i64,
    ) -> Result<Vec<Offspring>, DbError> {
        let records = sqlx::query_as::<_, Offspring>(
            "SELECT * FROM offspring WHERE breeding_record_id = ? ORDER BY id",
        )
        .bind(breeding_record_id)
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::from_sqlx)?;
        Ok(records)
    }

    // ==========================================================================
    // Feed records
    // ==========================================================================

    pub async fn add_feed_record(&self, new: &NewFeedRecord) -> Result<i64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO feed_records (
                record_date, animal_id, feed_type, quantity, unit, cost, supplier, notes
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(new.record_date)
        .bind(new.animal_id)
        .bind(&new.feed_type)
        .bind(new.quantity)
        .bind(&new.unit)
        .bind(new.cost)
        .bind(&new.supplier)
        .bind(&new.notes)
        .execute(&self.pool)
        .await
        .map_err(DbError::from_sqlx)?;
        Ok(result.last_insert_rowid())
    }

    /// Feed records filtered by animal and/or inclusive date range,
    /// most recent first.
    pub async fn get_feed_records(&self, filter: &RecordFilter) -> Result<Vec<FeedRecord>, DbError> {
        let mut sql = String::from("SELECT * FROM feed_records WHERE 1=1");
        filter.push_clauses(&mut sql, "animal_id", "record_date");
        sql.push_str(" ORDER BY record_date DESC");

        let mut query = sqlx::query_as::<_, FeedRecord>(&sql);
        if let Some(id) = filter.animal_id {
            query = query.bind(id);
        }
        if let Some(start) = filter.start_date {
            query = query.bind(start);
        }
        if let Some(end) = filter.end_date {
            query = query.bind(end);
        }
        let records = query
            .fetch_all(&self.pool)
            .await
            .map_err(DbError::from_sqlx)?;
        Ok(records)
    }

    // ==========================================================================
    // Weight records
    // ==========================================================================

    pub async fn add_weight_record(&self, new: &NewWeightRecord) -> Result<i64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO weight_records (animal_id, weight_date, weight, body_condition_score, notes)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(new.animal_id)
        .bind(new.weight_date)
        .bind(new.weight)
        .bind(new.body_condition_score)
        .bind(&new.notes)
        .execute(&self.pool)
        .await
        .map_err(DbError::from_sqlx)?;
        Ok(result.last_insert_rowid())
    }

    /// All weight records for one animal, oldest first to support trend
    /// charting.
    pub async fn get_weight_records_by_animal(
        &self,
        animal_id: i64,
    ) -> Result<Vec<WeightRecord>, DbError> {
        let records = sqlx::query_as::<_, WeightRecord>(
            "SELECT * FROM weight_records WHERE animal_id = ? ORDER BY weight_date",
        )
        .bind(animal_id)
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::from_sqlx)?;
        Ok(records)
    }

    // ==========================================================================
    // Financial records
    // ==========================================================================

    pub async fn add_financial_record(&self, new: &NewFinancialRecord) -> Result<i64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO financial_records (
                transaction_date, transaction_type, category, amount,
                description, animal_id, payment_method, notes
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(new.transaction_date)
        .bind(new.transaction_type)
        .bind(&new.category)
        .bind(new.amount)
        .bind(&new.description)
        .bind(new.animal_id)
        .bind(&new.payment_method)
        .bind(&new.notes)
        .execute(&self.pool)
        .await
        .map_err(DbError::from_sqlx)?;
        Ok(result.last_insert_rowid())
    }

    /// Financial records filtered by animal and/or inclusive date range,
    /// most recent first.
    pub async fn get_financial_records(
        &self,
        filter: &RecordFilter,
    ) -> Result<Vec<FinancialRecord>, DbError> {
        let mut sql = String::from("SELECT * FROM financial_records WHERE 1=1");
        filter.push_clauses(&mut sql, "animal_id", "transaction_date");
        sql.push_str(" ORDER BY transaction_date DESC");

        let mut query = sqlx::query_as::<_, FinancialRecord>(&sql);
        if let Some(id) = filter.animal_id {
            query = query.bind(id);
        }
        if let Some(start) = filter.start_date {
            query = query.bind(start);
        }
        if let Some(end) = filter.end_date {
            query = query.bind(end);
        }
        let records = query
            .fetch_all(&self.pool)
            .await
            .map_err(DbError::from_sqlx)?;
        Ok(records)
    }

    // ==========================================================================
    // Milk production
    // ==========================================================================

    pub async fn add_milk_production(&self, new: &NewMilkProduction) -> Result<i64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO milk_production (
                animal_id, production_date, morning_yield, evening_yield,
                total_yield, fat_content, quality_grade, notes
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(new.animal_id)
        .bind(new.production_date)
        .bind(new.morning_yield)
        .bind(new.evening_yield)
        .bind(new.total_yield)
        .bind(new.fat_content)
        .bind(&new.quality_grade)
        .bind(&new.notes)
        .execute(&self.pool)
        .await
        .map_err(DbError::from_sqlx)?;
        Ok(result.last_insert_rowid())
    }

    /// All milk production records for one animal, most recent first.
    pub async fn get_milk_production_by_animal(
        &self,
        animal_id: i64,
    ) -> Result<Vec<MilkProduction>, DbError> {
        let records = sqlx::query_as::<_, MilkProduction>(
            "SELECT * FROM milk_production WHERE animal_id = ? ORDER BY production_date DESC",
        )
        .bind(animal_id)
        .fetch_all(&self.pool)
        .await
        .map_err(DbError::from_sqlx)?;
        Ok(records)
    }

    // ==========================================================================
    // Egg production
    // ==========================================================================

    pub async fn add_egg_production(&self, new: &NewEggProduction) -> Result<i64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO egg_production (
                production_date, flock_id, eggs_collected, eggs_broken,
                eggs_sold, price_per_egg, notes
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(new.production_date)
        .bind(new.flock_id)
        .bind(new.eggs_collected)
        .bind(new.eggs_broken)
        .bind(new.eggs_sold)
        .bind(new.price_per_egg)
        .bind(&new.notes)
        .execute(&self.pool)
        .await
        .map_err(DbError::from_sqlx)?;
        Ok(result.last_insert_rowid())
    }

    /// Egg production records filtered by flock and/or inclusive date range,
    /// most recent first. The filter's `animal_id` doubles as the flock id.
    pub async fn get_egg_production(
        &self,
        filter: &RecordFilter,
    ) -> Result<Vec<EggProduction>, DbError> {
        let mut sql = String::from("SELECT * FROM egg_production WHERE 1=1");
        filter.push_clauses(&mut sql, "flock_id", "production_date");
        sql.push_str(" ORDER BY production_date DESC");

        let mut query = sqlx::query_as::<_, EggProduction>(&sql);
        if let Some(id) = filter.animal_id {
            query = query.bind(id);
        }
        if let Some(start) = filter.start_date {
            query = query.bind(start);
        }
        if let Some(end) = filter.end_date {
            query = query.bind(end);
        }
        let records = query
            .fetch_all(&self.pool)
            .await
            .map_err(DbError::from_sqlx)?;
        Ok(records)
    }
}
