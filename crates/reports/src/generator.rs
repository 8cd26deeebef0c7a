use crate::error::ReportError;
use crate::summary::{
    profile_health_slice, profile_weight_slice, BreedingSummary, FinancialSummary, HealthSummary,
    HerdSummary,
};
use chrono::{Local, NaiveDate};
use core_types::{Animal, BreedingRecord, FinancialRecord, HealthRecord, Vaccination, WeightRecord};
use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run, Table, TableCell, TableRow};
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use tracing::info;

/// Renders in-memory record collections into paginated DOCX documents and
/// persists them under timestamped filenames in the output directory.
///
/// The generator has no knowledge of how records were obtained: callers fetch
/// them (pre-sorted per kind) and hand over plain slices.
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    output_dir: PathBuf,
}

impl ReportGenerator {
    /// Creates a generator writing into `output_dir`, creating the directory
    /// if needed.
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self, ReportError> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Generates a comprehensive profile for one animal: basic info table,
    /// the 10 most recent health records, the full vaccination table, and the
    /// last 20 weight entries.
    pub fn generate_animal_profile(
        &self,
        animal: &Animal,
        health_records: &[HealthRecord],
        vaccinations: &[Vaccination],
        weight_records: &[WeightRecord],
    ) -> Result<PathBuf, ReportError> {
        let mut doc = titled_document(&format!("Animal Profile: {}", animal.tag_number));

        // Basic Information Section
        doc = doc.add_paragraph(heading("Basic Information"));
        let current_weight = match animal.weight {
            Some(w) => format!("{} kg", w),
            None => "N/A".to_string(),
        };
        let basic_info = vec![
            ("Tag Number", animal.tag_number.clone()),
            ("Name", opt_text(&animal.name)),
            ("Species", animal.species.clone()),
            ("Breed", opt_text(&animal.breed)),
            ("Gender", opt_text(&animal.gender)),
            ("Date of Birth", opt_date(&animal.date_of_birth)),
            ("Current Weight", current_weight),
            ("Color", opt_text(&animal.color)),
            ("Status", animal.status.to_string()),
            ("Acquisition Date", opt_date(&animal.acquisition_date)),
        ];
        doc = doc.add_table(Table::new(
            basic_info
                .into_iter()
                .map(|(label, value)| table_row(vec![label.to_string(), value]))
                .collect(),
        ));

        // Health Records Section
        doc = doc
            .add_paragraph(Paragraph::new())
            .add_paragraph(heading("Health Records"));
        if health_records.is_empty() {
            doc = doc.add_paragraph(body_text("No health records found."));
        } else {
            for record in profile_health_slice(health_records) {
                doc = doc.add_paragraph(subheading(&format!(
                    "Record Date: {}",
                    record.record_date
                )));
                doc = doc.add_paragraph(field_line("Type", &record.record_type));
                if let Some(diagnosis) = &record.diagnosis {
                    doc = doc.add_paragraph(field_line("Diagnosis", diagnosis));
                }
                if let Some(treatment) = &record.treatment {
                    doc = doc.add_paragraph(field_line("Treatment", treatment));
                }
                if let Some(medications) = &record.medications {
                    doc = doc.add_paragraph(field_line("Medications", medications));
                }
                if let Some(veterinarian) = &record.veterinarian {
                    doc = doc.add_paragraph(field_line("Veterinarian", veterinarian));
                }
            }
        }

        // Vaccination Records Section
        doc = doc
            .add_paragraph(Paragraph::new())
            .add_paragraph(heading("Vaccination Records"));
        if vaccinations.is_empty() {
            doc = doc.add_paragraph(body_text("No vaccination records found."));
        } else {
            let mut rows = vec![table_row(vec![
                "Vaccine Name".to_string(),
                "Date".to_string(),
                "Next Due".to_string(),
                "Veterinarian".to_string(),
            ])];
            for vac in vaccinations {
                rows.push(table_row(vec![
                    vac.vaccine_name.clone(),
                    vac.vaccination_date.to_string(),
                    opt_date(&vac.next_due_date),
                    opt_text(&vac.veterinarian),
                ]));
            }
            doc = doc.add_table(Table::new(rows));
        }

        // Weight History Section
        doc = doc
            .add_paragraph(Paragraph::new())
            .add_paragraph(heading("Weight History"));
        if weight_records.is_empty() {
            doc = doc.add_paragraph(body_text("No weight records found."));
        } else {
            let mut rows = vec![table_row(vec![
                "Date".to_string(),
                "Weight (kg)".to_string(),
                "Body Condition Score".to_string(),
            ])];
            for record in profile_weight_slice(weight_records) {
                let score = match record.body_condition_score {
                    Some(s) => s.to_string(),
                    None => "N/A".to_string(),
                };
                rows.push(table_row(vec![
                    record.weight_date.to_string(),
                    record.weight.to_string(),
                    score,
                ]));
            }
            doc = doc.add_table(Table::new(rows));
        }

        let filename = format!(
            "animal_profile_{}_{}.docx",
            animal.tag_number,
            Local::now().format("%Y%m%d_%H%M%S")
        );
        self.save(doc, &filename)
    }

    /// Generates the herd report: tallies by species, gender and status,
    /// followed by one detail row per animal in input order.
    pub fn generate_herd_report(&self, animals: &[Animal]) -> Result<PathBuf, ReportError> {
        let summary = HerdSummary::from_animals(animals);
        let mut doc = titled_document("Herd Management Report");

        doc = doc.add_paragraph(heading("Herd Summary"));
        doc = doc.add_paragraph(body_text(&format!("Total Animals: {}", summary.total)));
        doc = doc.add_paragraph(Paragraph::new());

        doc = doc.add_paragraph(subheading("By Species"));
        for (species, count) in &summary.by_species {
            doc = doc.add_paragraph(bullet(&format!("{species}: {count}")));
        }
        doc = doc.add_paragraph(subheading("By Gender"));
        for (gender, count) in &summary.by_gender {
            doc = doc.add_paragraph(bullet(&format!("{gender}: {count}")));
        }
        doc = doc.add_paragraph(subheading("By Status"));
        for (status, count) in &summary.by_status {
            doc = doc.add_paragraph(bullet(&format!("{status}: {count}")));
        }

        doc = doc.add_paragraph(page_break());
        doc = doc.add_paragraph(heading("Detailed Animal List"));
        let mut rows = vec![table_row(vec![
            "Tag Number".to_string(),
            "Name".to_string(),
            "Species".to_string(),
            "Breed".to_string(),
            "Gender".to_string(),
            "Age/DOB".to_string(),
            "Status".to_string(),
        ])];
        for animal in animals {
            rows.push(table_row(vec![
                animal.tag_number.clone(),
                opt_text(&animal.name),
                animal.species.clone(),
                opt_text(&animal.breed),
                opt_text(&animal.gender),
                opt_date(&animal.date_of_birth),
                animal.status.to_string(),
            ]));
        }
        doc = doc.add_table(Table::new(rows));

        let filename = format!("herd_report_{}.docx", Local::now().format("%Y%m%d_%H%M%S"));
        self.save(doc, &filename)
    }

    /// Generates the financial report: income/expense totals, net result,
    /// expense breakdown by category, and a full transaction table.
    pub fn generate_financial_report(
        &self,
        records: &[FinancialRecord],
        period: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<PathBuf, ReportError> {
        let summary = FinancialSummary::from_records(records);
        let mut doc = titled_document("Financial Report");

        if let Some((start, end)) = period {
            doc = doc.add_paragraph(body_text(&format!("Period: {start} to {end}")));
        }

        doc = doc.add_paragraph(heading("Financial Summary"));
        doc = doc.add_table(Table::new(vec![
            table_row(vec!["Total Income".to_string(), currency(summary.total_income)]),
            table_row(vec![
                "Total Expenses".to_string(),
                currency(summary.total_expenses),
            ]),
            table_row(vec!["Net Profit/Loss".to_string(), currency(summary.net)]),
        ]));

        doc = doc.add_paragraph(Paragraph::new());
        doc = doc.add_paragraph(subheading("Expenses by Category"));
        for (category, amount) in &summary.expenses_by_category {
            doc = doc.add_paragraph(bullet(&format!("{category}: {}", currency(*amount))));
        }

        doc = doc.add_paragraph(page_break());
        doc = doc.add_paragraph(heading("Detailed Transactions"));
        let mut rows = vec![table_row(vec![
            "Date".to_string(),
            "Type".to_string(),
            "Category".to_string(),
            "Amount".to_string(),
            "Description".to_string(),
        ])];
        for record in records {
            rows.push(table_row(vec![
                record.transaction_date.to_string(),
                record.transaction_type.to_string(),
                opt_text(&record.category),
                currency(record.amount),
                opt_text(&record.description),
            ]));
        }
        doc = doc.add_table(Table::new(rows));

        let filename = format!(
            "financial_report_{}.docx",
            Local::now().format("%Y%m%d_%H%M%S")
        );
        self.save(doc, &filename)
    }

    /// Generates the health report: counts by record type, then a detail
    /// section per record in input order.
    pub fn generate_health_report(
        &self,
        records: &[HealthRecord],
        period: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<PathBuf, ReportError> {
        let summary = HealthSummary::from_records(records);
        let mut doc = titled_document("Health Management Report");

        if let Some((start, end)) = period {
            doc = doc.add_paragraph(body_text(&format!("Period: {start} to {end}")));
        }

        doc = doc.add_paragraph(heading("Health Records Summary"));
        doc = doc.add_paragraph(body_text(&format!("Total Records: {}", summary.total)));

        doc = doc.add_paragraph(subheading("Records by Type"));
        for (record_type, count) in &summary.by_type {
            doc = doc.add_paragraph(bullet(&format!("{record_type}: {count}")));
        }

        doc = doc.add_paragraph(page_break());
        doc = doc.add_paragraph(heading("Detailed Health Records"));
        for record in records {
            doc = doc.add_paragraph(subheading(&format!("Date: {}", record.record_date)));
            doc = doc.add_paragraph(field_line("Animal ID", &record.animal_id.to_string()));
            doc = doc.add_paragraph(field_line("Type", &record.record_type));
            if let Some(diagnosis) = &record.diagnosis {
                doc = doc.add_paragraph(field_line("Diagnosis", diagnosis));
            }
            if let Some(treatment) = &record.treatment {
                doc = doc.add_paragraph(field_line("Treatment", treatment));
            }
            if let Some(medications) = &record.medications {
                let dosage = record.dosage.clone().unwrap_or_default();
                doc = doc.add_paragraph(field_line(
                    "Medications",
                    &format!("{medications} ({dosage})"),
                ));
            }
        }

        let filename = format!("health_report_{}.docx", Local::now().format("%Y%m%d_%H%M%S"));
        self.save(doc, &filename)
    }

    /// Generates the breeding report: totals, success rate (or "N/A" for an
    /// empty herd), and a detail table in input order.
    pub fn generate_breeding_report(
        &self,
        records: &[BreedingRecord],
    ) -> Result<PathBuf, ReportError> {
        let summary = BreedingSummary::from_records(records);
        let mut doc = titled_document("Breeding Management Report");

        doc = doc.add_paragraph(heading("Breeding Summary"));
        doc = doc.add_paragraph(body_text(&format!(
            "Total Breeding Records: {}",
            summary.total
        )));
        doc = doc.add_paragraph(body_text(&format!(
            "Successful Breedings: {}",
            summary.successful
        )));
        doc = doc.add_paragraph(body_text(&format!(
            "Success Rate: {}",
            summary.success_rate_label()
        )));

        doc = doc.add_paragraph(page_break());
        doc = doc.add_paragraph(heading("Detailed Breeding Records"));
        let mut rows = vec![table_row(vec![
            "Breeding Date".to_string(),
            "Dam ID".to_string(),
            "Sire ID".to_string(),
            "Method".to_string(),
            "Expected Delivery".to_string(),
            "Success".to_string(),
        ])];
        for record in records {
            let success = if record.success == Some(true) { "Yes" } else { "No" };
            rows.push(table_row(vec![
                record.breeding_date.to_string(),
                record.dam_id.to_string(),
                record.sire_id.map(|id| id.to_string()).unwrap_or_default(),
                opt_text(&record.breeding_method),
                opt_date(&record.expected_delivery),
                success.to_string(),
            ]));
        }
        doc = doc.add_table(Table::new(rows));

        let filename = format!(
            "breeding_report_{}.docx",
            Local::now().format("%Y%m%d_%H%M%S")
        );
        self.save(doc, &filename)
    }

    /// Packs the document into an in-memory buffer first and writes the file
    /// in one shot, so a failed build never leaves a partial report behind.
    fn save(&self, doc: Docx, filename: &str) -> Result<PathBuf, ReportError> {
        let mut buffer = Cursor::new(Vec::new());
        doc.build()
            .pack(&mut buffer)
            .map_err(docx_rs::DocxError::from)?;

        let path = self.output_dir.join(filename);
        fs::write(&path, buffer.into_inner())?;
        info!(path = %path.display(), "report written");
        Ok(path)
    }
}

/// Starts a document with a centered title and a right-aligned generation
/// timestamp, matching the layout every report kind shares.
fn titled_document(title: &str) -> Docx {
    Docx::new()
        .add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(title).size(40).bold())
                .align(AlignmentType::Center),
        )
        .add_paragraph(
            Paragraph::new()
                .add_run(
                    Run::new()
                        .add_text(format!(
                            "Generated on: {}",
                            Local::now().format("%Y-%m-%d %H:%M:%S")
                        ))
                        .italic(),
                )
                .align(AlignmentType::Right),
        )
        .add_paragraph(Paragraph::new())
}

fn heading(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).size(32).bold())
}

fn subheading(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text).size(26).bold())
}

fn body_text(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

fn bullet(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(format!("\u{2022} {text}")))
}

/// A "Label: value" line with the label in bold.
fn field_line(label: &str, value: &str) -> Paragraph {
    Paragraph::new()
        .add_run(Run::new().add_text(format!("{label}: ")).bold())
        .add_run(Run::new().add_text(value))
}

fn table_row(cells: Vec<String>) -> TableRow {
    TableRow::new(
        cells
            .into_iter()
            .map(|cell| {
                TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(cell)))
            })
            .collect(),
    )
}

fn page_break() -> Paragraph {
    Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
}

fn currency(amount: f64) -> String {
    format!("${amount:.2}")
}

fn opt_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn opt_date(value: &Option<NaiveDate>) -> String {
    value.map(|d| d.to_string()).unwrap_or_default()
}
