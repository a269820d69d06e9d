//! CLI commands for category management

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::BudgetBookResult;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// Add a new category
    Add {
        /// Category name
        name: String,

        /// Display color as #RRGGBB
        #[arg(short, long)]
        color: Option<String>,
    },

    /// List all categories
    #[command(alias = "ls")]
    List,

    /// Update a category's name or color
    Update {
        /// Category name or ID
        category: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New color as #RRGGBB
        #[arg(short, long)]
        color: Option<String>,
    },

    /// Delete a category (fails if it has expenses)
    #[command(alias = "rm")]
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category subcommand
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> BudgetBookResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::Add { name, color } => {
            let category = service.create(&name, color.as_deref())?;
            println!("Created category '{}' ({})", category.name, category.id);
        }
        CategoryCommands::List => {
            let categories = service.list()?;
            print!("{}", format_category_list(&categories));
        }
        CategoryCommands::Update {
            category,
            name,
            color,
        } => {
            let target = service.require(&category)?;
            let updated = service.update(target.id, name.as_deref(), color.as_deref())?;
            println!("Updated category '{}'", updated.name);
        }
        CategoryCommands::Delete { category } => {
            let target = service.require(&category)?;
            service.delete(target.id)?;
            println!("Deleted category '{}'", target.name);
        }
    }

    Ok(())
}
