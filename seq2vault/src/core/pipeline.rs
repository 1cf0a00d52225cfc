// src/core/pipeline.rs
use crate::core::rules::{
    BlockRefMode, admonitions, block_ids, block_refs, cleanup, embeds, flatten, numbered_lists,
    properties, tasks, whitespace,
};
use crate::models::ConversionStats;

/// Options that change how the stages rewrite a note.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RuleOptions {
    pub block_refs: BlockRefMode,
    pub flatten_top_level: bool,
}

/// One rewrite pass. [`Stage::ORDER`] is the order notes go through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Properties,
    Admonitions,
    NumberedLists,
    BlockIds,
    BlockRefs,
    Tasks,
    Collapsed,
    Logbook,
    ImageSizing,
    Embeds,
    Flatten,
    Whitespace,
}

impl Stage {
    /// Later stages rely on earlier ones having already removed property,
    /// marker and id lines, so this order is fixed.
    pub const ORDER: [Self; 12] = [
        Self::Properties,
        Self::Admonitions,
        Self::NumberedLists,
        Self::BlockIds,
        Self::BlockRefs,
        Self::Tasks,
        Self::Collapsed,
        Self::Logbook,
        Self::ImageSizing,
        Self::Embeds,
        Self::Flatten,
        Self::Whitespace,
    ];

    /// Stages that rewrite only the body and leave frontmatter alone.
    #[inline]
    #[must_use]
    pub const fn skips_frontmatter(self) -> bool {
        !matches!(self, Self::Properties | Self::Whitespace)
    }

    /// Runs this stage, adding whatever it counted to `stats`.
    #[must_use]
    pub fn apply(
        self,
        content: &str,
        options: &RuleOptions,
        stats: &mut ConversionStats,
    ) -> String {
        match self {
            Self::Properties => {
                let (converted, keys) = properties::convert_properties(content);
                stats.properties.extend(keys);
                converted
            }
            Self::Admonitions => {
                let (converted, count) = admonitions::convert_admonitions(content);
                stats.admonitions = stats.admonitions.saturating_add(count);
                converted
            }
            Self::NumberedLists => numbered_lists::convert_numbered_lists(content),
            Self::BlockIds => block_ids::relocate_block_ids(content),
            Self::BlockRefs => {
                let (converted, flagged) =
                    block_refs::handle_block_refs(content, options.block_refs);
                stats.block_refs_flagged = stats.block_refs_flagged.saturating_add(flagged);
                converted
            }
            Self::Tasks => {
                let (converted, states) = tasks::convert_tasks(content);
                stats.task_states = stats.task_states.saturating_add(states);
                converted
            }
            Self::Collapsed => cleanup::remove_collapsed(content),
            Self::Logbook => cleanup::remove_logbooks(content),
            Self::ImageSizing => cleanup::remove_image_sizing(content),
            Self::Embeds => embeds::convert_embeds(content),
            Self::Flatten if options.flatten_top_level => flatten::flatten_top_level(content),
            Self::Flatten => content.to_owned(),
            Self::Whitespace => whitespace::normalize_whitespace(content),
        }
    }
}

/// A converted note together with what the conversion counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub content: String,
    pub stats: ConversionStats,
}

/// Pushes one note through every stage in [`Stage::ORDER`].
///
/// Once a note has frontmatter, the body stages only see the text after it.
#[must_use]
pub fn convert_note(content: &str, options: &RuleOptions) -> Conversion {
    let mut stats = ConversionStats::new();
    stats.queries = u64::try_from(content.matches("{{query").count()).unwrap_or(u64::MAX);

    let content = Stage::ORDER.iter().fold(content.to_owned(), |text, stage| {
        if stage.skips_frontmatter() {
            let (frontmatter, body) = properties::split_frontmatter(&text);
            format!("{frontmatter}{}", stage.apply(body, options, &mut stats))
        } else {
            stage.apply(&text, options, &mut stats)
        }
    });

    Conversion { content, stats }
}
