use std::{fmt::Debug, fmt::Display, str::FromStr};

use types::{AdZone, BlogPost, Category, Comment, Game};

use crate::QueryError;

/// A record whose string fields can be matched by the filters.
pub trait Searchable {
    type Field: Copy + Debug + PartialEq + FromStr<Err = QueryError>;

    /// Every string value stored under `field`. Single-valued fields yield
    /// one entry, tag lists yield one per tag.
    fn field_values(&self, field: Self::Field) -> Vec<&str>;
}

/// Declares a field enum whose variants parse from and print as the
/// camelCase names used on the wire.
macro_rules! field_enum {
    ($name:ident, $kind:literal { $($variant:ident => $wire:literal),+ $(,)? }) => {
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = QueryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|field| field.as_str() == s)
                    .ok_or_else(|| QueryError::UnknownField {
                        kind: $kind,
                        name: s.to_string(),
                    })
            }
        }
    };
}

field_enum!(GameField, "game" {
    Title => "title",
    Slug => "slug",
    Description => "description",
    Category => "category",
    Tags => "tags",
});

field_enum!(CategoryField, "category" {
    Name => "name",
    Slug => "slug",
    Icon => "icon",
});

field_enum!(BlogPostField, "blog post" {
    Title => "title",
    Slug => "slug",
    Content => "content",
    Excerpt => "excerpt",
    Category => "category",
    Tags => "tags",
    SeoTitle => "seoTitle",
    SeoDescription => "seoDescription",
});

field_enum!(AdZoneField, "ad zone" {
    Name => "name",
    Position => "position",
    AdCode => "adCode",
});

field_enum!(CommentField, "comment" {
    Author => "author",
    Email => "email",
    Content => "content",
    Status => "status",
});

impl Searchable for Game {
    type Field = GameField;

    fn field_values(&self, field: GameField) -> Vec<&str> {
        match field {
            GameField::Title => vec![self.title.as_str()],
            GameField::Slug => vec![self.slug.as_str()],
            GameField::Description => vec![self.description.as_str()],
            GameField::Category => vec![self.category.as_str()],
            GameField::Tags => self.tags.iter().map(String::as_str).collect(),
        }
    }
}

impl Searchable for Category {
    type Field = CategoryField;

    fn field_values(&self, field: CategoryField) -> Vec<&str> {
        match field {
            CategoryField::Name => vec![self.name.as_str()],
            CategoryField::Slug => vec![self.slug.as_str()],
            CategoryField::Icon => vec![self.icon.as_str()],
        }
    }
}

impl Searchable for BlogPost {
    type Field = BlogPostField;

    fn field_values(&self, field: BlogPostField) -> Vec<&str> {
        match field {
            BlogPostField::Title => vec![self.title.as_str()],
            BlogPostField::Slug => vec![self.slug.as_str()],
            BlogPostField::Content => vec![self.content.as_str()],
            BlogPostField::Excerpt => vec![self.excerpt.as_str()],
            BlogPostField::Category => vec![self.category.as_str()],
            BlogPostField::Tags => self.tags.iter().map(String::as_str).collect(),
            BlogPostField::SeoTitle => vec![self.seo_title.as_str()],
            BlogPostField::SeoDescription => vec![self.seo_description.as_str()],
        }
    }
}

impl Searchable for AdZone {
    type Field = AdZoneField;

    fn field_values(&self, field: AdZoneField) -> Vec<&str> {
        match field {
            AdZoneField::Name => vec![self.name.as_str()],
            AdZoneField::Position => vec![self.position.as_str()],
            AdZoneField::AdCode => vec![self.ad_code.as_str()],
        }
    }
}

impl Searchable for Comment {
    type Field = CommentField;

    fn field_values(&self, field: CommentField) -> Vec<&str> {
        match field {
            CommentField::Author => vec![self.author.as_str()],
            CommentField::Email => vec![self.email.as_str()],
            CommentField::Content => vec![self.content.as_str()],
            CommentField::Status => vec![self.status.as_str()],
        }
    }
}
