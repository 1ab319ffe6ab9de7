//! Catalog form state
//!
//! Pure state behind the add/edit item screen. The lifecycle is
//! `Closed -> Open(Add | Edit) -> Submitting -> Closed`; opening in edit
//! mode pre-fills every field from the record, opening in add mode resets
//! to category-appropriate defaults. Submission is silently blocked while
//! `name` or `price` is empty — that is the only client-side gate.

use shared::{
    CatalogItem, ItemCategory, ItemCreate, ItemStatus, ItemUpdate, normalize_tag,
};

/// Hard cap on picked images; adding beyond it is a silent no-op
pub const MAX_IMAGES: usize = 4;

/// The service-type tag that reveals the free-text name field
pub const OTHER_SERVICE_TAG: &str = "other";

const DEFAULT_PRODUCT_CATEGORIES: &[&str] = &[
    "spare_parts",
    "lubricants",
    "tyres",
    "batteries",
    "accessories",
];

const DEFAULT_UOMS: &[&str] = &["piece", "litre", "box", "set", "kg"];

/// Fixed service-type tags offered by the multi-select
pub const SERVICE_TYPE_TAGS: &[&str] = &[
    "repair",
    "maintenance",
    "tuning",
    "washing",
    "electrical",
    OTHER_SERVICE_TAG,
];

// ── Vocabulary ──────────────────────────────────────────────────────

/// Session-local, append-only tag vocabulary seeded with defaults.
/// Operator-added tags are normalized and become selectable for the rest
/// of the session; nothing here is persisted server-side.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    tags: Vec<String>,
}

impl Vocabulary {
    pub fn with_defaults(defaults: &[&str]) -> Self {
        Self {
            tags: defaults.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn first(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Normalize a label and append it if new. Returns the normalized tag,
    /// or `None` when the label normalizes to nothing.
    pub fn add(&mut self, label: &str) -> Option<String> {
        let tag = normalize_tag(label);
        if tag.is_empty() {
            return None;
        }
        if !self.contains(&tag) {
            self.tags.push(tag.clone());
        }
        Some(tag)
    }
}

// ── Form state ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Add,
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Closed,
    Open(FormMode),
    Submitting(FormMode),
}

/// Editable field state, string-typed exactly like the form inputs
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub name: String,
    pub price: String,
    pub description: String,
    pub status: ItemStatus,
    pub images: Vec<String>,

    // Service fields
    pub duration: String,
    pub service_types: Vec<String>,
    pub other_service_name: String,

    // Product fields
    pub sub_category: String,
    pub stock: String,
    pub sku: String,
    pub company: String,
    pub uom: String,
    pub purchase_price: String,
    pub tax_percentage: String,
}

/// What a submission sends to the server
#[derive(Debug, Clone)]
pub enum FormSubmission {
    Create(ItemCreate),
    Update { id: String, payload: ItemUpdate },
}

/// Catalog form editor state
#[derive(Debug, Clone)]
pub struct CatalogForm {
    provider_id: String,
    phase: FormPhase,
    category: ItemCategory,
    editing_id: Option<String>,
    pub draft: ItemDraft,
    pub categories: Vocabulary,
    pub uoms: Vocabulary,
}

impl CatalogForm {
    pub fn new(provider_id: impl Into<String>) -> Self {
        Self {
            provider_id: provider_id.into(),
            phase: FormPhase::Closed,
            category: ItemCategory::Service,
            editing_id: None,
            draft: ItemDraft::default(),
            categories: Vocabulary::with_defaults(DEFAULT_PRODUCT_CATEGORIES),
            uoms: Vocabulary::with_defaults(DEFAULT_UOMS),
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    /// Open for a new item, resetting to category defaults.
    pub fn open_add(&mut self, category: ItemCategory) {
        self.phase = FormPhase::Open(FormMode::Add);
        self.category = category;
        self.editing_id = None;
        self.draft = ItemDraft::default();
        if category == ItemCategory::Product {
            self.draft.uom = self.uoms.first().unwrap_or_default().to_string();
        }
    }

    /// Open pre-filled from an existing record.
    pub fn open_edit(&mut self, item: &CatalogItem) {
        self.phase = FormPhase::Open(FormMode::Edit);
        self.category = item.category;
        self.editing_id = Some(item.id.clone());

        let fmt_opt_f64 = |v: Option<f64>| v.map(|n| n.to_string()).unwrap_or_default();
        let fmt_opt_i64 = |v: Option<i64>| v.map(|n| n.to_string()).unwrap_or_default();

        self.draft = ItemDraft {
            name: item.name.clone(),
            price: item.price.to_string(),
            description: item.description.clone().unwrap_or_default(),
            status: item.status,
            images: item.images.clone(),
            duration: fmt_opt_i64(item.duration),
            service_types: item.service_types.clone(),
            other_service_name: item.other_service_name.clone().unwrap_or_default(),
            sub_category: item.sub_category.clone().unwrap_or_default(),
            stock: fmt_opt_i64(item.stock),
            sku: item.sku.clone().unwrap_or_default(),
            company: item.company.clone().unwrap_or_default(),
            uom: item.uom.clone().unwrap_or_default(),
            purchase_price: fmt_opt_f64(item.purchase_price),
            tax_percentage: fmt_opt_f64(item.tax_percentage),
        };

        // Stored tags stay selectable even if they were session-added
        // custom tags from an earlier session.
        if !self.draft.sub_category.is_empty() {
            self.categories.add(&self.draft.sub_category.clone());
        }
        if !self.draft.uom.is_empty() {
            self.uoms.add(&self.draft.uom.clone());
        }
    }

    pub fn close(&mut self) {
        self.phase = FormPhase::Closed;
        self.editing_id = None;
        self.draft = ItemDraft::default();
    }

    // ── Images ──────────────────────────────────────────────────────

    /// Add a picked image URI. Bounded by [`MAX_IMAGES`]: at the cap this
    /// is a silent no-op, never an error.
    pub fn add_image(&mut self, uri: impl Into<String>) -> bool {
        if self.draft.images.len() >= MAX_IMAGES {
            return false;
        }
        self.draft.images.push(uri.into());
        true
    }

    pub fn remove_image(&mut self, index: usize) {
        if index < self.draft.images.len() {
            self.draft.images.remove(index);
        }
    }

    // ── Service types ───────────────────────────────────────────────

    pub fn toggle_service_type(&mut self, tag: &str) {
        if let Some(pos) = self.draft.service_types.iter().position(|t| t == tag) {
            self.draft.service_types.remove(pos);
            if tag == OTHER_SERVICE_TAG {
                self.draft.other_service_name.clear();
            }
        } else {
            self.draft.service_types.push(tag.to_string());
        }
    }

    /// Whether the free-text "other" name field is revealed and required
    pub fn requires_other_name(&self) -> bool {
        self.draft
            .service_types
            .iter()
            .any(|t| t == OTHER_SERVICE_TAG)
    }

    // ── Vocabularies ────────────────────────────────────────────────

    /// Append a custom product category and select it immediately.
    pub fn add_category(&mut self, label: &str) -> Option<String> {
        let tag = self.categories.add(label)?;
        self.draft.sub_category = tag.clone();
        Some(tag)
    }

    /// Append a custom unit of measure and select it immediately.
    pub fn add_uom(&mut self, label: &str) -> Option<String> {
        let tag = self.uoms.add(label)?;
        self.draft.uom = tag.clone();
        Some(tag)
    }

    // ── Submission ──────────────────────────────────────────────────

    /// The only client-side required-field gate.
    pub fn can_submit(&self) -> bool {
        !self.draft.name.trim().is_empty() && !self.draft.price.trim().is_empty()
    }

    /// Move to `Submitting` and produce the payload, or `None` when the
    /// form is not open or the gate blocks it (silently, no error).
    pub fn begin_submit(&mut self) -> Option<FormSubmission> {
        let mode = match self.phase {
            FormPhase::Open(mode) => mode,
            _ => return None,
        };
        if !self.can_submit() {
            return None;
        }
        self.phase = FormPhase::Submitting(mode);

        Some(match mode {
            FormMode::Add => FormSubmission::Create(self.build_create()),
            FormMode::Edit => FormSubmission::Update {
                id: self.editing_id.clone().unwrap_or_default(),
                payload: self.build_update(),
            },
        })
    }

    /// Record the submission outcome: close on success, reopen on failure
    /// so the operator can resubmit.
    pub fn finish_submit(&mut self, success: bool) {
        if let FormPhase::Submitting(mode) = self.phase {
            if success {
                self.close();
            } else {
                self.phase = FormPhase::Open(mode);
            }
        }
    }

    fn build_create(&self) -> ItemCreate {
        let opt = |s: &String| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        let mut payload = ItemCreate {
            provider_id: self.provider_id.clone(),
            category: self.category,
            name: self.draft.name.trim().to_string(),
            price: self.draft.price.trim().to_string(),
            description: opt(&self.draft.description),
            images: self.draft.images.clone(),
            ..Default::default()
        };

        match self.category {
            ItemCategory::Service => {
                payload.duration = opt(&self.draft.duration);
                payload.service_types = self.draft.service_types.clone();
                if self.requires_other_name() {
                    payload.other_service_name = opt(&self.draft.other_service_name);
                }
            }
            ItemCategory::Product => {
                payload.sub_category = opt(&self.draft.sub_category);
                payload.stock = opt(&self.draft.stock);
                payload.sku = opt(&self.draft.sku);
                payload.company = opt(&self.draft.company);
                payload.uom = opt(&self.draft.uom);
                payload.purchase_price = opt(&self.draft.purchase_price);
                payload.tax_percentage = opt(&self.draft.tax_percentage);
            }
        }
        payload
    }

    fn build_update(&self) -> ItemUpdate {
        let opt = |s: &String| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        };

        let mut payload = ItemUpdate {
            name: Some(self.draft.name.trim().to_string()),
            price: Some(self.draft.price.trim().to_string()),
            status: Some(self.draft.status),
            description: opt(&self.draft.description),
            // Existing URIs ride along so the server preserves them and
            // appends any new uploads.
            images: Some(self.draft.images.clone()),
            ..Default::default()
        };

        match self.category {
            ItemCategory::Service => {
                payload.duration = opt(&self.draft.duration);
                payload.service_types = Some(self.draft.service_types.clone());
                if self.requires_other_name() {
                    payload.other_service_name = opt(&self.draft.other_service_name);
                }
            }
            ItemCategory::Product => {
                payload.sub_category = opt(&self.draft.sub_category);
                payload.stock = opt(&self.draft.stock);
                payload.sku = opt(&self.draft.sku);
                payload.company = opt(&self.draft.company);
                payload.uom = opt(&self.draft.uom);
                payload.purchase_price = opt(&self.draft.purchase_price);
                payload.tax_percentage = opt(&self.draft.tax_percentage);
            }
        }
        payload
    }
}
