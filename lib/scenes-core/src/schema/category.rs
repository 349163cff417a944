use std::fmt::Debug;

use shared_types::{ITwinId, SceneObjectId};
use strum::{Display, EnumIter, IntoEnumIterator};

use super::error::SchemaError;
use super::kind::SchemaKind;

pub const RELATED_ID_FIELD: &str = "relatedId";
pub const ITWIN_ID_FIELD: &str = "iTwinId";

/// Determines which reference field a scene object must carry next to its data
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SchemaCategory {
    /// No reference beyond the common fields
    Standard,
    /// Styles another scene object, referenced by `relatedId`
    ResourceStyling,
    /// Belongs to an iTwin, referenced by `iTwinId`
    ITwinScoped,
}

impl SchemaCategory {
    pub fn kinds(self) -> impl Iterator<Item = SchemaKind> {
        SchemaKind::iter().filter(move |kind| kind.category() == self)
    }

    pub fn required_field(self) -> Option<&'static str> {
        match self {
            Self::Standard => None,
            Self::ResourceStyling => Some(RELATED_ID_FIELD),
            Self::ITwinScoped => Some(ITWIN_ID_FIELD),
        }
    }

    pub(crate) fn check(
        self,
        kind: SchemaKind,
        extra: &CategoryExtraFields,
    ) -> Result<(), SchemaError> {
        let present = match self {
            Self::Standard => true,
            Self::ResourceStyling => extra.related_id.is_some(),
            Self::ITwinScoped => extra.i_twin_id.is_some(),
        };

        match (present, self.required_field()) {
            (false, Some(field)) => Err(SchemaError::MissingCategoryField { kind, field }),
            _ => Ok(()),
        }
    }
}

/// Reference fields accompanying a payload on the untyped path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryExtraFields {
    pub related_id: Option<SceneObjectId>,
    pub i_twin_id: Option<ITwinId>,
}

impl CategoryExtraFields {
    pub fn related(related_id: impl Into<SceneObjectId>) -> Self {
        Self {
            related_id: Some(related_id.into()),
            i_twin_id: None,
        }
    }

    pub fn itwin(i_twin_id: impl Into<ITwinId>) -> Self {
        Self {
            related_id: None,
            i_twin_id: Some(i_twin_id.into()),
        }
    }
}

/// Typed counterpart of [`CategoryExtraFields`]: a schema's category decides which
/// of these a typed create/update must provide
pub trait CategoryFields: Debug + Clone + PartialEq + Send + Sync + 'static {
    const CATEGORY: SchemaCategory;

    fn from_extra(kind: SchemaKind, extra: CategoryExtraFields) -> Result<Self, SchemaError>;
    fn into_extra(self) -> CategoryExtraFields;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardFields;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceStylingFields {
    pub related_id: SceneObjectId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ITwinScopedFields {
    pub i_twin_id: ITwinId,
}

impl CategoryFields for StandardFields {
    const CATEGORY: SchemaCategory = SchemaCategory::Standard;

    fn from_extra(_kind: SchemaKind, _extra: CategoryExtraFields) -> Result<Self, SchemaError> {
        Ok(Self)
    }

    fn into_extra(self) -> CategoryExtraFields {
        CategoryExtraFields::default()
    }
}

impl CategoryFields for ResourceStylingFields {
    const CATEGORY: SchemaCategory = SchemaCategory::ResourceStyling;

    fn from_extra(kind: SchemaKind, extra: CategoryExtraFields) -> Result<Self, SchemaError> {
        let related_id = extra.related_id.ok_or(SchemaError::MissingCategoryField {
            kind,
            field: RELATED_ID_FIELD,
        })?;
        Ok(Self { related_id })
    }

    fn into_extra(self) -> CategoryExtraFields {
        CategoryExtraFields::related(self.related_id)
    }
}

impl CategoryFields for ITwinScopedFields {
    const CATEGORY: SchemaCategory = SchemaCategory::ITwinScoped;

    fn from_extra(kind: SchemaKind, extra: CategoryExtraFields) -> Result<Self, SchemaError> {
        let i_twin_id = extra.i_twin_id.ok_or(SchemaError::MissingCategoryField {
            kind,
            field: ITWIN_ID_FIELD,
        })?;
        Ok(Self { i_twin_id })
    }

    fn into_extra(self) -> CategoryExtraFields {
        CategoryExtraFields::itwin(self.i_twin_id)
    }
}
