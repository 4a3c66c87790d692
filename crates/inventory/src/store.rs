//! The inventory store: ordered products plus their backing file.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use amazonia_core::{DomainError, DomainResult, ProductId};
use amazonia_products::{Price, Product, Quantity, UNCATEGORIZED};

use crate::record::{self, breaks_line};
use crate::report::{LoadOutcome, LoadReport, SkipReason, SkippedLine};

/// Writing the backing file failed.
#[derive(Debug, Error)]
#[error("failed to save inventory to {}: {source}", .path.display())]
pub struct PersistError {
    path: PathBuf,
    #[source]
    source: io::Error,
}

impl PersistError {
    fn new(path: &Path, source: io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Persistence outcome of a mutation that was already applied in memory.
///
/// A failed save does not roll the mutation back.
#[derive(Debug)]
pub enum SaveStatus {
    Saved,
    Unsaved(PersistError),
}

impl SaveStatus {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveStatus::Saved)
    }

    pub fn error(&self) -> Option<&PersistError> {
        match self {
            SaveStatus::Saved => None,
            SaveStatus::Unsaved(err) => Some(err),
        }
    }
}

/// Command: add a new product.
///
/// Quantity and price arrive as raw operator numbers and are validated by the
/// store.
#[derive(Debug, Clone, PartialEq)]
pub struct AddProduct {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: f64,
}

/// Command: change some fields of an existing product.
///
/// `None` leaves the field untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProduct {
    pub id: ProductId,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

impl UpdateProduct {
    /// An update for `id` that changes nothing yet.
    pub fn new(id: impl Into<ProductId>) -> Self {
        Self {
            id: id.into(),
            quantity: None,
            price: None,
            category: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.quantity.is_none() && self.price.is_none() && self.category.is_none()
    }
}

/// In-memory product collection backed by a flat text file.
///
/// Insertion order is preserved. Ids are unique: `ids` mirrors the ids in
/// `products` and is updated on every insert and removal.
///
/// The file is loaded once by [`Inventory::open`] and rewritten in full after
/// each successful mutation. Call [`Inventory::close`] at the end of the
/// session for the final flush; dropping the store does not save.
#[derive(Debug)]
pub struct Inventory {
    path: PathBuf,
    products: Vec<Product>,
    ids: HashSet<ProductId>,
    report: LoadReport,
    mutated: bool,
}

impl Inventory {
    /// Open the store backed by `path`, loading whatever it holds.
    ///
    /// Never fails: a missing file yields an empty inventory, an unreadable
    /// file yields an empty inventory for this session, and corrupt lines are
    /// skipped. Details are in [`Inventory::load_report`].
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut inventory = Self {
            path: path.into(),
            products: Vec::new(),
            ids: HashSet::new(),
            report: LoadReport::default(),
            mutated: false,
        };
        inventory.report = inventory.load();
        inventory
    }

    fn load(&mut self) -> LoadReport {
        let path = self.path.display().to_string();
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(%path, "inventory file not found; starting empty");
                return LoadReport::missing();
            }
            Err(err) => {
                warn!(%path, error = %err, "inventory file unreadable; starting empty");
                return LoadReport::unreadable(err.to_string());
            }
        };

        let mut report = LoadReport::default();
        for (index, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let reason = match record::parse_line(line) {
                Ok(product) if self.ids.contains(product.id()) => {
                    SkipReason::DuplicateId(product.id().clone())
                }
                Ok(product) => {
                    self.insert(product);
                    report.loaded += 1;
                    continue;
                }
                Err(err) => SkipReason::Malformed(err),
            };

            warn!(%path, line = index + 1, content = line, reason = %reason, "skipping corrupt inventory line");
            report.skipped.push(SkippedLine {
                line_number: index + 1,
                content: line.to_string(),
                reason,
            });
        }

        info!(%path, loaded = report.loaded, skipped = report.skipped.len(), "inventory loaded");
        report
    }

    /// Rewrite the whole backing file from memory.
    ///
    /// Plain overwrite: an interrupted write can leave the file truncated.
    pub fn save(&self) -> Result<(), PersistError> {
        let mut contents = String::new();
        for product in &self.products {
            contents.push_str(&record::format_line(product));
            contents.push('\n');
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| PersistError::new(&self.path, e))?;
        }
        fs::write(&self.path, contents).map_err(|e| PersistError::new(&self.path, e))?;

        debug!(path = %self.path.display(), products = self.products.len(), "inventory saved");
        Ok(())
    }

    /// Final flush. Consumes the store so nothing can mutate it afterwards.
    ///
    /// When the backing file existed but could not be read and nothing was
    /// changed since, the flush is skipped so the unread file is not replaced
    /// by an empty one.
    pub fn close(self) -> Result<(), PersistError> {
        if !self.mutated && matches!(self.report.outcome, LoadOutcome::Unreadable(_)) {
            warn!(path = %self.path.display(), "inventory file was never read; leaving it untouched");
            return Ok(());
        }
        self.save()?;
        info!(path = %self.path.display(), "inventory closed");
        Ok(())
    }

    fn persist(&mut self) -> SaveStatus {
        self.mutated = true;
        match self.save() {
            Ok(()) => SaveStatus::Saved,
            Err(err) => {
                warn!(error = %err, "change applied in memory but not saved");
                SaveStatus::Unsaved(err)
            }
        }
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.products.iter().position(|p| p.id().as_str() == id)
    }

    fn insert(&mut self, product: Product) {
        self.ids.insert(product.id().clone());
        self.products.push(product);
    }

    pub fn add(&mut self, cmd: AddProduct) -> DomainResult<SaveStatus> {
        if cmd.id.is_blank() {
            return Err(DomainError::validation("id cannot be empty"));
        }
        if cmd.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        let quantity = Quantity::new(cmd.quantity)?;
        let price = Price::new(cmd.price)?;
        if self.ids.contains(&cmd.id) {
            return Err(DomainError::duplicate(cmd.id.as_str()));
        }

        let category = if cmd.category.trim().is_empty() {
            UNCATEGORIZED.to_string()
        } else {
            cmd.category
        };
        for value in [cmd.id.as_str(), cmd.name.as_str(), category.as_str()] {
            if breaks_line(value) {
                warn!(id = %cmd.id, value, "field contains a separator and will not reload cleanly");
            }
        }

        info!(id = %cmd.id, name = %cmd.name, "product added");
        self.insert(Product::new(cmd.id, cmd.name, quantity, price, category));
        Ok(self.persist())
    }

    /// Remove a product, handing it back to the caller.
    pub fn remove(&mut self, id: &str) -> DomainResult<(Product, SaveStatus)> {
        let index = self.position(id).ok_or_else(|| DomainError::not_found(id))?;
        let product = self.products.remove(index);
        self.ids.remove(product.id());

        info!(id, "product removed");
        Ok((product, self.persist()))
    }

    /// Apply the supplied fields. All values are validated before any is
    /// written, so a rejected update leaves the product untouched.
    pub fn update(&mut self, cmd: UpdateProduct) -> DomainResult<SaveStatus> {
        let index = self
            .position(cmd.id.as_str())
            .ok_or_else(|| DomainError::not_found(cmd.id.as_str()))?;
        if cmd.is_empty() {
            return Err(DomainError::no_changes(cmd.id.as_str()));
        }

        let quantity = cmd.quantity.map(Quantity::new).transpose()?;
        let price = cmd.price.map(Price::new).transpose()?;
        let category = cmd.category.map(|c| {
            if c.trim().is_empty() {
                UNCATEGORIZED.to_string()
            } else {
                c
            }
        });
        if let Some(c) = category.as_deref().filter(|c| breaks_line(c)) {
            warn!(id = %cmd.id, value = c, "field contains a separator and will not reload cleanly");
        }

        let product = &mut self.products[index];
        if let Some(quantity) = quantity {
            product.set_quantity(quantity);
        }
        if let Some(price) = price {
            product.set_price(price);
        }
        if let Some(category) = category {
            product.set_category(category);
        }

        info!(id = %cmd.id, "product updated");
        Ok(self.persist())
    }

    /// Case-insensitive substring match on names, in inventory order.
    pub fn search(&self, partial_name: &str) -> Vec<&Product> {
        let needle = partial_name.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Sum of quantity × price over every product.
    pub fn total_value(&self) -> f64 {
        // `Sum for f64` starts at -0.0, which would render as "$-0.00".
        self.products.iter().fold(0.0, |total, p| total + p.value())
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.position(id).map(|index| &self.products[index])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.report
    }
}
