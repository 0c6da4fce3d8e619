//! Contact table state and its pure transition function.
//!
//! [`reduce`] never performs I/O. Transitions that need data from the service
//! return an [`Effect`]; the caller runs it and feeds the answer back as
//! [`TableAction::PageLoaded`].
//!
//! Sorting is applied to the loaded page only. A page of five contacts sorted
//! by last name is not the first five contacts by last name across the store;
//! paging always follows store order.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::model::{Column, ContactForm, ContactPage, ContactRecord};

/// Page sizes offered by the table. Any size of at least one is accepted.
pub const PAGE_SIZE_OPTIONS: [u64; 3] = [5, 10, 25];

/// Page size used before the user picks one.
pub const DEFAULT_PAGE_SIZE: u64 = 5;

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// A to Z.
    #[default]
    Asc,
    /// Z to A.
    Desc,
}

impl SortDirection {
    /// The other direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    /// Column compared.
    pub column: Column,
    /// Comparison direction.
    pub direction: SortDirection,
}

impl Default for Sort {
    fn default() -> Self {
        Self {
            column: Column::FirstName,
            direction: SortDirection::Asc,
        }
    }
}

/// Page coordinates sent to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    /// 1-based page number.
    pub page: u64,
    /// Page size.
    pub limit: u64,
}

/// In-progress edit of one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditBuffer {
    /// Identifier of the row being edited.
    pub id: String,
    /// Working copy of the row's fields.
    pub form: ContactForm,
}

/// Completed write, reported to [`after_mutation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// A contact was created.
    Created,
    /// The contact with this id was updated.
    Updated(String),
    /// The contact with this id was deleted.
    Deleted(String),
}

/// Everything the table shows, plus what it needs to stay consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableState {
    /// Current 1-based page.
    pub page: u64,
    /// Rows per page.
    pub page_size: u64,
    /// Active sort.
    pub sort: Sort,
    /// Rows of the current page, in display order.
    pub rows: Vec<ContactRecord>,
    /// Pages at the current size, as last reported.
    pub total_pages: u64,
    /// Stored contacts, as last reported.
    pub total_contacts: u64,
    /// At most one row under edit.
    pub edit: Option<EditBuffer>,
    /// Selected row identifiers.
    pub selection: BTreeSet<String>,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort: Sort::default(),
            rows: Vec::new(),
            total_pages: 0,
            total_contacts: 0,
            edit: None,
            selection: BTreeSet::new(),
        }
    }
}

impl TableState {
    /// Coordinates of the page the table currently wants.
    #[must_use]
    pub const fn query(&self) -> PageQuery {
        PageQuery {
            page: self.page,
            limit: self.page_size,
        }
    }

    fn apply_sort(&mut self) {
        let sort = self.sort;
        self.rows.sort_by(|a, b| compare_rows(a, b, sort));
    }

    fn fetch(self) -> Transition {
        let query = self.query();
        Transition {
            state: self,
            effect: Some(Effect::Fetch(query)),
        }
    }

    fn done(self) -> Transition {
        Transition {
            state: self,
            effect: None,
        }
    }
}

/// Inputs to [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    /// Load the current page again.
    Refresh,
    /// Move to a 1-based page.
    ChangePage(u64),
    /// Change rows per page; returns to page one. The table offers
    /// [`PAGE_SIZE_OPTIONS`] but accepts any size of at least one.
    ChangePageSize(u64),
    /// Sort by a column; repeating the active column flips direction.
    SortBy(Column),
    /// The service answered a fetch.
    PageLoaded {
        /// Coordinates the fetch was issued for.
        query: PageQuery,
        /// Service answer.
        page: ContactPage,
    },
    /// Start editing a row, abandoning any other edit.
    BeginEdit(String),
    /// Change one field of the edit buffer.
    EditField {
        /// Field to change.
        column: Column,
        /// New value.
        value: String,
    },
    /// Drop the edit buffer.
    CancelEdit,
    /// Add or remove a row from the selection.
    ToggleSelection(String),
    /// A write succeeded.
    MutationSucceeded(Mutation),
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the given page and report it back as [`TableAction::PageLoaded`].
    Fetch(PageQuery),
}

/// Result of [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the action.
    pub state: TableState,
    /// Work the caller must perform, if any.
    pub effect: Option<Effect>,
}

fn choose_sort(mut state: TableState, column: Column) -> TableState {
    state.sort = if state.sort.column == column {
        Sort {
            column,
            direction: state.sort.direction.toggled(),
        }
    } else {
        Sort {
            column,
            direction: SortDirection::Asc,
        }
    };
    state.apply_sort();
    state
}

fn page_loaded(mut state: TableState, query: PageQuery, page: ContactPage) -> Transition {
    if query != state.query() {
        return state.done();
    }

    // Deleting the last row of the last page leaves the table past the end.
    if page.contacts.is_empty() && state.page > 1 && page.total_pages < state.page {
        state.page = page.total_pages.max(1);
        state.total_pages = page.total_pages;
        state.total_contacts = page.total_contacts;
        return state.fetch();
    }

    state.rows = page.contacts;
    state.total_pages = page.total_pages;
    state.total_contacts = page.total_contacts;
    state.selection.clear();
    let still_present = state
        .edit
        .as_ref()
        .is_some_and(|edit| state.rows.iter().any(|row| row.id == edit.id));
    if !still_present {
        state.edit = None;
    }
    state.apply_sort();
    state.done()
}

fn begin_edit(mut state: TableState, id: &str) -> TableState {
    state.edit = state
        .rows
        .iter()
        .find(|row| row.id == id)
        .map(|row| EditBuffer {
            id: row.id.clone(),
            form: ContactForm::from(row),
        });
    state
}

/// Post-write hook: re-fetch the current page so the active sort is
/// reapplied to fresh data.
#[must_use]
pub fn after_mutation(mut state: TableState, mutation: &Mutation) -> Transition {
    match mutation {
        Mutation::Created => {}
        Mutation::Updated(id) | Mutation::Deleted(id) => {
            if state.edit.as_ref().is_some_and(|edit| &edit.id == id) {
                state.edit = None;
            }
            if matches!(mutation, Mutation::Deleted(_)) {
                state.selection.remove(id);
            }
        }
    }
    state.fetch()
}

/// Apply `action` to `state`.
#[must_use]
pub fn reduce(state: TableState, action: TableAction) -> Transition {
    match action {
        TableAction::Refresh => state.fetch(),
        TableAction::ChangePage(page) => {
            if page < 1 || page == state.page {
                return state.done();
            }
            TableState { page, ..state }.fetch()
        }
        TableAction::ChangePageSize(page_size) => {
            if page_size < 1 {
                return state.done();
            }
            TableState {
                page: 1,
                page_size,
                ..state
            }
            .fetch()
        }
        TableAction::SortBy(column) => choose_sort(state, column).done(),
        TableAction::PageLoaded { query, page } => page_loaded(state, query, page),
        TableAction::BeginEdit(id) => begin_edit(state, &id).done(),
        TableAction::EditField { column, value } => {
            let mut next = state;
            if let Some(edit) = next.edit.as_mut() {
                edit.form.set(column, value);
            }
            next.done()
        }
        TableAction::CancelEdit => TableState {
            edit: None,
            ..state
        }
        .done(),
        TableAction::ToggleSelection(id) => {
            let mut next = state;
            if !next.selection.remove(&id) && next.rows.iter().any(|row| row.id == id) {
                next.selection.insert(id);
            }
            next.done()
        }
        TableAction::MutationSucceeded(mutation) => after_mutation(state, &mutation),
    }
}

/// Compare two rows on the raw string value of the sort column.
#[must_use]
pub fn compare_rows(a: &ContactRecord, b: &ContactRecord, sort: Sort) -> Ordering {
    let order = a.value(sort.column).cmp(b.value(sort.column));
    match sort.direction {
        SortDirection::Asc => order,
        SortDirection::Desc => order.reverse(),
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
