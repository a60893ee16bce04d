//! View registry: which page and which login form are visible

use serde::Serialize;

use crate::errors::Result;

use super::states::{Form, Page};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewRegistry {
    page: Page,
    form: Form,
    /// Bumped whenever a page or step change asks the view to scroll to top
    scroll_resets: u64,
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self {
            page: Page::Login,
            form: Form::Login,
            scroll_resets: 0,
        }
    }
}

impl ViewRegistry {
    pub fn current_page(&self) -> Page {
        self.page
    }

    pub fn current_form(&self) -> Form {
        self.form
    }

    pub fn scroll_resets(&self) -> u64 {
        self.scroll_resets
    }

    pub fn is_page_visible(&self, page: Page) -> bool {
        self.page == page
    }

    pub fn is_form_visible(&self, form: Form) -> bool {
        self.form == form
    }

    /// Show a page by its registered name.
    ///
    /// Unknown names return `UnknownPage` and leave the view unchanged.
    pub fn show_page(&mut self, name: &str) -> Result<()> {
        let page: Page = name.parse()?;
        self.show(page);
        Ok(())
    }

    /// Show `page`, hiding every other page, and scroll to top.
    pub fn show(&mut self, page: Page) {
        if self.page != page {
            tracing::info!(from = %self.page, to = %page, "page change");
        }
        self.page = page;
        self.request_scroll_reset();
    }

    /// Show a login-page form by its registered name.
    pub fn show_form_named(&mut self, name: &str) -> Result<()> {
        let form: Form = name.parse()?;
        self.show_form(form);
        Ok(())
    }

    /// Show `form`, hiding the other two.
    pub fn show_form(&mut self, form: Form) {
        tracing::debug!(form = %form, "form switch");
        self.form = form;
    }

    pub fn request_scroll_reset(&mut self) {
        self.scroll_resets += 1;
    }
}
