//! Interactive menu loop.
//!
//! End of input at an operation prompt cancels that operation only; at the
//! menu prompt it ends the session like option 7. A line that is not UTF-8
//! text aborts the current operation and returns to the menu. The caller owns
//! the final flush of the inventory.

use std::io::{self, BufRead, Write};

use amazonia_core::ProductId;
use amazonia_inventory::{AddProduct, Inventory, UpdateProduct};

use crate::messages;
use crate::prompt::{PromptError, PromptResult, Prompter};

const INVALID_TEXT: &str = "Error: La entrada no es texto válido.";

const MENU: &str = "
==============================================================
    SISTEMA DE GESTIÓN DE INVENTARIOS - PRODUCTOS AMAZÓNICOS
==============================================================
    1. Añadir nuevo producto
    2. Eliminar producto por ID
    3. Actualizar cantidad o precio de producto
    4. Buscar y mostrar producto por nombre
    5. Mostrar todos los productos en el inventario
    6. Consultar valor total del inventario
    7. Salir del sistema
==============================================================
";

/// Run the menu until the operator exits or input ends.
pub fn run<R: BufRead, W: Write>(inventory: &mut Inventory, input: R, output: W) -> io::Result<()> {
    let mut session = Session {
        inventory,
        prompt: Prompter::new(input, output),
    };
    session.start()?;

    loop {
        write!(session.out(), "{MENU}")?;
        let choice = match session.prompt.ask("\nSelecciona una opción (1-7): ") {
            Ok(choice) => choice,
            Err(PromptError::Cancelled) => break,
            Err(PromptError::InvalidText) => {
                writeln!(session.out(), "{INVALID_TEXT}")?;
                continue;
            }
            Err(PromptError::Io(err)) => return Err(err),
        };

        let outcome = match choice.as_str() {
            "1" => session.add(),
            "2" => session.remove(),
            "3" => session.update(),
            "4" => session.search(),
            "5" => session.list(),
            "6" => session.total(),
            "7" => break,
            _ => {
                writeln!(
                    session.out(),
                    "Opción inválida. Por favor, selecciona una opción entre 1 y 7."
                )?;
                Ok(())
            }
        };

        match outcome {
            Ok(()) => {}
            Err(PromptError::Cancelled) => writeln!(session.out(), "\nOperación cancelada.")?,
            Err(PromptError::InvalidText) => writeln!(session.out(), "{INVALID_TEXT}")?,
            Err(PromptError::Io(err)) => return Err(err),
        }
    }

    session.farewell()
}

struct Session<'a, R, W> {
    inventory: &'a mut Inventory,
    prompt: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn out(&mut self) -> &mut W {
        self.prompt.output()
    }

    fn start(&mut self) -> io::Result<()> {
        for line in messages::load_report(self.inventory.load_report()) {
            writeln!(self.prompt.output(), "{line}")?;
        }
        let count = self.inventory.len();
        writeln!(self.out(), "\nSistema iniciado con {count} producto(s).")
    }

    fn farewell(&mut self) -> io::Result<()> {
        let rule = "=".repeat(60);
        let out = self.out();
        writeln!(out, "\n{rule}")?;
        writeln!(out, "Gracias por usar el Sistema de Gestión de Inventarios.")?;
        writeln!(out, "¡Hasta luego!")?;
        writeln!(out, "{rule}")
    }

    fn add(&mut self) -> PromptResult<()> {
        writeln!(self.out(), "\n--- AÑADIR NUEVO PRODUCTO ---")?;
        let id = self.prompt.required_text("Ingresa ID único del producto: ")?;
        let name = self
            .prompt
            .required_text("Nombre del producto (ej. Aguaje, Cacao): ")?;
        let category = self
            .prompt
            .required_text("Categoría (ej. Frutas, Semillas, Especias): ")?;
        let quantity = self.prompt.non_negative_integer("Cantidad en stock: ")?;
        let price = self.prompt.non_negative_decimal("Precio por unidad ($): ")?;

        let message = match self.inventory.add(AddProduct {
            id: ProductId::from(id),
            name: name.clone(),
            category,
            quantity,
            price,
        }) {
            Ok(status) => messages::added(&name, &status),
            Err(err) => messages::domain_error(&err),
        };
        writeln!(self.out(), "{message}")?;
        Ok(())
    }

    fn remove(&mut self) -> PromptResult<()> {
        writeln!(self.out(), "\n--- ELIMINAR PRODUCTO ---")?;
        let id = self.prompt.required_text("Ingresa ID único del producto: ")?;

        let message = match self.inventory.remove(&id) {
            Ok((_, status)) => messages::removed(&id, &status),
            Err(err) => messages::domain_error(&err),
        };
        writeln!(self.out(), "{message}")?;
        Ok(())
    }

    fn update(&mut self) -> PromptResult<()> {
        writeln!(self.out(), "\n--- ACTUALIZAR PRODUCTO ---")?;
        let id = self.prompt.required_text("Ingresa ID único del producto: ")?;
        writeln!(self.out(), "(Deja vacío si no quieres cambiar algún campo)")?;

        let category = self.prompt.ask("Nueva categoría: ")?;
        let quantity = self.prompt.ask("Nueva cantidad: ")?;
        let price = self.prompt.ask("Nuevo precio: ")?;

        let mut cmd = UpdateProduct::new(id.as_str());
        if !category.is_empty() {
            cmd.category = Some(category);
        }
        if !quantity.is_empty() {
            match quantity.parse::<i64>() {
                Ok(n) if n >= 0 => cmd.quantity = Some(n),
                Ok(_) => {
                    writeln!(self.out(), "Error: La cantidad debe ser no negativa.")?;
                    return Ok(());
                }
                Err(_) => {
                    writeln!(self.out(), "Error: La cantidad debe ser un número entero.")?;
                    return Ok(());
                }
            }
        }
        if !price.is_empty() {
            match price.parse::<f64>() {
                Ok(n) if n.is_finite() && n >= 0.0 => cmd.price = Some(n),
                Ok(n) if n < 0.0 => {
                    writeln!(self.out(), "Error: El precio debe ser no negativo.")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.out(), "Error: El precio debe ser un número válido.")?;
                    return Ok(());
                }
            }
        }

        let message = match self.inventory.update(cmd) {
            Ok(status) => messages::updated(&id, &status),
            Err(err) => messages::domain_error(&err),
        };
        writeln!(self.out(), "{message}")?;
        Ok(())
    }

    fn search(&mut self) -> PromptResult<()> {
        writeln!(self.out(), "\n--- BUSCAR PRODUCTO ---")?;
        let partial = self
            .prompt
            .required_text("Ingresa el nombre (o parte de él) a buscar: ")?;

        let out = self.prompt.output();
        let found = self.inventory.search(&partial);
        if found.is_empty() {
            writeln!(out, "{}", messages::not_found_by_name(&partial))?;
        } else {
            writeln!(out, "{}", messages::SEARCH_HEADER)?;
            for product in found {
                writeln!(out, "{product}")?;
            }
        }
        Ok(())
    }

    fn list(&mut self) -> PromptResult<()> {
        let out = self.prompt.output();
        writeln!(out, "\n--- INVENTARIO COMPLETO ---")?;
        if self.inventory.is_empty() {
            writeln!(out, "{}", messages::EMPTY_INVENTORY)?;
        } else {
            writeln!(out, "{}", messages::FULL_INVENTORY_HEADER)?;
            for product in self.inventory.products() {
                writeln!(out, "{product}")?;
            }
        }
        Ok(())
    }

    fn total(&mut self) -> PromptResult<()> {
        let total = self.inventory.total_value();
        let out = self.out();
        writeln!(out, "\n--- VALOR TOTAL DEL INVENTARIO ---")?;
        writeln!(out, "{}", messages::total_value(total))?;
        Ok(())
    }
}
