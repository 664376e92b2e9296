use anyhow::{Context, Result, bail};
use std::env;
use tracing::{error, info, warn};
use uuid::Uuid;

use tmc_client::api::{ApiClient, decode_token_claims};
use tmc_client::config::ClientConfig;
use tmc_client::import::{
    ImageFile, ProductGrid, add_images, assemble, build_template_workbook,
    filter_valid_candidates, map_rows_to_candidates, parse_workbook, validate_rows,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    dotenv::dotenv().ok();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(|s| s.as_str()) {
        Some("template") => {
            let out = args.get(1).map(|s| s.as_str()).unwrap_or("template.xlsx");
            write_template(out)
        }
        Some(path) => import_spreadsheet(path).await,
        None => {
            bail!(
                "usage: import_products <spreadsheet.xlsx> [--store-id N] [--images-dir DIR] | import_products template [out.xlsx]"
            )
        }
    }
}

fn write_template(path: &str) -> Result<()> {
    let bytes = build_template_workbook().context("Failed to build template workbook")?;
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path))?;
    info!("Template workbook written to {}", path);
    Ok(())
}

async fn import_spreadsheet(path: &str) -> Result<()> {
    let session = Uuid::new_v4();
    info!("Starting bulk product import {} from {}", session, path);

    let config = ClientConfig::from_env().context(
        "Backend origin not configured. Set TMC_BASE_URL (and optionally TMC_API_URL) or add them to .env",
    )?;

    let token = env::var("TMC_TOKEN").context("TMC_TOKEN is required to upload products")?;

    // store_id can come from the flag or from the token's display claim
    let store_id = match store_id_arg()? {
        Some(id) => id,
        None => decode_token_claims(&token)
            .and_then(|claims| claims.store_id)
            .context("No --store-id given and the token carries no store_id claim")?,
    };

    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path))?;
    let raw_rows = parse_workbook(&bytes).context("Failed to parse spreadsheet")?;

    let candidates = map_rows_to_candidates(&raw_rows);
    let (valid, skipped) = filter_valid_candidates(candidates);
    if skipped > 0 {
        warn!("{} row(s) were incomplete and skipped", skipped);
    }
    if valid.is_empty() {
        bail!("No importable rows in {}", path);
    }

    let mut grid = ProductGrid::new();
    grid.merge_imported(valid);
    info!("Grid holds {} row(s) after import", grid.len());

    if let Some(images_dir) = flag_value("--images-dir") {
        attach_row_images(&mut grid, &images_dir)?;
    }

    let errors = validate_rows(grid.rows());
    if !errors.is_empty() {
        for err in &errors {
            error!("Row {}: {}", err.row_index + 1, err.kind);
        }
        bail!("{} validation error(s), nothing was uploaded", errors.len());
    }

    let submission = assemble(store_id, grid.rows())?;
    let client = ApiClient::new(config)?.with_token(token);

    match client.bulk_upload_products(&submission).await {
        Ok(_) => {
            grid.reset();
            info!(
                "✅ Import {} complete: {} product(s) uploaded to store {}",
                session,
                submission.products.len(),
                store_id
            );
            Ok(())
        }
        Err(e) => {
            // Grid state is preserved so a retry would not re-enter data
            error!("❌ Upload failed, grid left untouched: {}", e);
            Err(e.into())
        }
    }
}

/// Attaches images from `<dir>/<row_number>/` (1-based) to each grid row,
/// in filename order so the upload order is deterministic.
fn attach_row_images(grid: &mut ProductGrid, dir: &str) -> Result<()> {
    for index in 0..grid.len() {
        let row_dir = std::path::Path::new(dir).join((index + 1).to_string());
        if !row_dir.is_dir() {
            continue;
        }

        let mut paths: Vec<_> = std::fs::read_dir(&row_dir)
            .with_context(|| format!("Failed to read {}", row_dir.display()))?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        paths.sort();

        let mut files = Vec::with_capacity(paths.len());
        for path in &paths {
            let file = ImageFile::from_path(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            files.push(file);
        }

        let count = files.len();
        let row = grid.row_mut(index).context("row index out of range")?;
        add_images(row, files).with_context(|| format!("Row {} images rejected", index + 1))?;
        info!("Attached {} image(s) to row {}", count, index + 1);
    }
    Ok(())
}

fn store_id_arg() -> Result<Option<i64>> {
    match flag_value("--store-id") {
        Some(value) => {
            let id = value
                .parse::<i64>()
                .context("--store-id must be an integer")?;
            Ok(Some(id))
        }
        None => Ok(None),
    }
}

fn flag_value(name: &str) -> Option<String> {
    let args: Vec<String> = env::args().collect();
    args.iter()
        .position(|arg| arg == name)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
