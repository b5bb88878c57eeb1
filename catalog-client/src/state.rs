//! Session state and reducers
//!
//! All UI-relevant state is modeled as plain data with immutable-copy
//! updates, so every transition is testable without a rendering layer.

use shared::{AiModel, AiModelPayload, TagList, parse_rating, split_tags};

/// One editable field of a draft record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Image,
    Developer,
    Description,
    Category,
    Tags,
    WebsiteLink,
    Rating,
    NumberOfReviews,
    UserClicks,
    Installs,
}

/// Draft record being composed; every field holds the text as typed.
///
/// No validation happens here. Coercion (tag split, rating parse) is
/// applied once, at submission time, by [`ModelForm::to_payload`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelForm {
    pub name: String,
    pub image: String,
    pub developer: String,
    pub description: String,
    pub category: String,
    pub tags: String,
    pub website_link: String,
    pub rating: String,
    pub number_of_reviews: String,
    pub user_clicks: String,
    pub installs: String,
}

impl ModelForm {
    /// Overwrite one field, preserving all others.
    #[must_use]
    pub fn set(&self, field: FormField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            FormField::Name => next.name = value,
            FormField::Image => next.image = value,
            FormField::Developer => next.developer = value,
            FormField::Description => next.description = value,
            FormField::Category => next.category = value,
            FormField::Tags => next.tags = value,
            FormField::WebsiteLink => next.website_link = value,
            FormField::Rating => next.rating = value,
            FormField::NumberOfReviews => next.number_of_reviews = value,
            FormField::UserClicks => next.user_clicks = value,
            FormField::Installs => next.installs = value,
        }
        next
    }

    /// Submission-time coercion: split and trim tags, parse the rating
    /// (`NaN` when unparsable), pass the counters through verbatim.
    pub fn to_payload(&self) -> AiModelPayload {
        AiModelPayload {
            id: None,
            name: self.name.clone(),
            image: self.image.clone(),
            developer: self.developer.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            tags: split_tags(&self.tags),
            website_link: self.website_link.clone(),
            rating: parse_rating(&self.rating),
            number_of_reviews: self.number_of_reviews.clone(),
            user_clicks: self.user_clicks.clone(),
            installs: self.installs.clone(),
        }
    }
}

/// Independent copy of a fetched record opened for editing.
///
/// Tags keep their fetched representation until the user touches the
/// field, so saving an untouched draft resubmits the identical sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    pub id: Option<String>,
    pub name: String,
    pub image: String,
    pub developer: String,
    pub description: String,
    pub category: String,
    pub tags: TagList,
    pub website_link: String,
    pub rating: String,
    pub number_of_reviews: String,
    pub user_clicks: String,
    pub installs: String,
}

impl EditDraft {
    /// Open a draft from a fetched record. The record itself stays
    /// untouched in the collection until the server confirms an update.
    pub fn from_model(model: &AiModel) -> Self {
        Self {
            id: model.id.clone(),
            name: model.name.clone(),
            image: model.image.clone(),
            developer: model.developer.clone(),
            description: model.description.clone(),
            category: model.category.clone(),
            tags: model.tags.clone(),
            website_link: model.website_link.clone(),
            rating: model.rating.to_string(),
            number_of_reviews: model.number_of_reviews.clone(),
            user_clicks: model.user_clicks.clone(),
            installs: model.installs.clone(),
        }
    }

    /// Overwrite one field, preserving all others. Editing the tags field
    /// replaces the fetched sequence with raw text.
    #[must_use]
    pub fn set(&self, field: FormField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        match field {
            FormField::Name => next.name = value,
            FormField::Image => next.image = value,
            FormField::Developer => next.developer = value,
            FormField::Description => next.description = value,
            FormField::Category => next.category = value,
            FormField::Tags => next.tags = TagList::Raw(value),
            FormField::WebsiteLink => next.website_link = value,
            FormField::Rating => next.rating = value,
            FormField::NumberOfReviews => next.number_of_reviews = value,
            FormField::UserClicks => next.user_clicks = value,
            FormField::Installs => next.installs = value,
        }
        next
    }

    /// Tag text to show in the edit form.
    pub fn tags_display(&self) -> String {
        self.tags.display()
    }

    /// Submission-time coercion; a fetched tag sequence is never re-split.
    pub fn to_payload(&self) -> AiModelPayload {
        AiModelPayload {
            id: self.id.clone(),
            name: self.name.clone(),
            image: self.image.clone(),
            developer: self.developer.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            tags: self.tags.normalize(),
            website_link: self.website_link.clone(),
            rating: parse_rating(&self.rating),
            number_of_reviews: self.number_of_reviews.clone(),
            user_clicks: self.user_clicks.clone(),
            installs: self.installs.clone(),
        }
    }
}

/// Which top-level view the UI is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// The submission form
    #[default]
    Compose,
    /// The fetched collection listing
    List,
}

/// Aggregate client-side session state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Draft being composed
    pub form: ModelForm,
    /// Last-fetched snapshot of the remote collection
    pub collection: Vec<AiModel>,
    /// Current top-level view
    pub view: ViewMode,
    /// Draft opened in the edit modal, if any
    pub edit: Option<EditDraft>,
    /// Blocking notification text from the last failed create/update
    pub alert: Option<String>,
}
