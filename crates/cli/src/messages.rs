//! Operator-facing wording (Spanish) for store outcomes.

use amazonia_core::DomainError;
use amazonia_inventory::{LoadOutcome, LoadReport, SaveStatus};

pub const SAVE_FAILED_SUFFIX: &str = "pero error al guardar en archivo.";

pub fn domain_error(err: &DomainError) -> String {
    match err {
        DomainError::Validation(msg) => format!("Error: Datos inválidos ({msg})."),
        DomainError::NotFound(id) => format!("Error: No se encontró un producto con ID {id}."),
        DomainError::Duplicate(id) => format!("Error: Ya existe un producto con ID {id}."),
        DomainError::NoChanges(id) => {
            format!("Advertencia: No se realizaron cambios en el producto con ID {id}.")
        }
    }
}

pub fn added(name: &str, status: &SaveStatus) -> String {
    if status.is_saved() {
        format!("Producto '{name}' añadido exitosamente y guardado en archivo.")
    } else {
        format!("Producto '{name}' añadido, {SAVE_FAILED_SUFFIX}")
    }
}

pub fn removed(id: &str, status: &SaveStatus) -> String {
    if status.is_saved() {
        format!("Producto con ID {id} eliminado y cambios guardados en archivo.")
    } else {
        format!("Producto con ID {id} eliminado, {SAVE_FAILED_SUFFIX}")
    }
}

pub fn updated(id: &str, status: &SaveStatus) -> String {
    if status.is_saved() {
        format!("Producto con ID {id} actualizado y cambios guardados en archivo.")
    } else {
        format!("Producto con ID {id} actualizado, {SAVE_FAILED_SUFFIX}")
    }
}

pub fn not_found_by_name(partial_name: &str) -> String {
    format!("No se encontraron productos con '{partial_name}' en el nombre.")
}

pub fn total_value(total: f64) -> String {
    format!("Valor total del inventario: ${total:.2}")
}

pub const EMPTY_INVENTORY: &str = "===El inventario está vacío.===";
pub const FULL_INVENTORY_HEADER: &str = "===Inventario completo de productos Amazónicos===";
pub const SEARCH_HEADER: &str = "Producto encontrado:";

/// Startup lines describing how the backing file was loaded.
pub fn load_report(report: &LoadReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .skipped
        .iter()
        .map(|skipped| {
            format!(
                "Advertencia: Línea corrupta en archivo de inventario ignorada: {}",
                skipped.content
            )
        })
        .collect();

    lines.push(match &report.outcome {
        LoadOutcome::Loaded => "Inventario cargado exitosamente desde archivo.".to_string(),
        LoadOutcome::Missing => {
            "Archivo de inventario no encontrado. Se creará uno nuevo al añadir productos."
                .to_string()
        }
        LoadOutcome::Unreadable(msg) => {
            format!("Error al leer el archivo de inventario: {msg}")
        }
    });
    lines
}
