//! `categories` command: print the picker's theme groups.

use crate::catalog::{self, ThemeCategory};
use crate::cli::common::{print_json, CliResult};
use clap::Args;
use serde::Serialize;

/// List theme categories and their members
#[derive(Debug, Clone, Args)]
pub struct CategoriesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ListCategoriesResponse {
    categories: &'static [ThemeCategory],
    count: usize,
}

impl CategoriesArgs {
    /// Execute the categories command
    pub fn execute(&self) -> CliResult<()> {
        let categories = catalog::theme_categories();
        let response = ListCategoriesResponse {
            categories,
            count: categories.len(),
        };

        if self.json {
            print_json(&response)?;
        } else {
            for category in response.categories {
                println!("{} ({}):", category.name, category.variants.len());
                for id in category.variants {
                    println!("  {}", id);
                }
                println!();
            }
        }

        Ok(())
    }
}
