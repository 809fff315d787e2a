//! Wire types mirroring the quran.com v4 JSON.
//!
//! The API nests translated names inside an object and reports pagination
//! in a sibling block; both are flattened into domain values here.

use serde::Deserialize;

use mihrab_domain::quran::{Chapter, Verse, VersePage};

/// Body of `GET /chapters`.
#[derive(Debug, Deserialize)]
pub(crate) struct ChaptersResponse {
    pub chapters: Vec<ChapterDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChapterDto {
    pub id: u16,
    pub name_simple: String,
    pub name_arabic: String,
    #[serde(default)]
    pub translated_name: Option<TranslatedNameDto>,
    pub verses_count: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TranslatedNameDto {
    pub name: String,
}

impl From<ChapterDto> for Chapter {
    fn from(dto: ChapterDto) -> Self {
        Self {
            id: dto.id,
            name_simple: dto.name_simple,
            name_arabic: dto.name_arabic,
            translated_name: dto.translated_name.map(|t| t.name),
            verses_count: dto.verses_count,
        }
    }
}

/// Body of `GET /verses/by_chapter/{id}`.
#[derive(Debug, Deserialize)]
pub(crate) struct VersesResponse {
    pub verses: Vec<VerseDto>,
    pub pagination: PaginationDto,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VerseDto {
    pub verse_key: String,
    pub text_uthmani: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PaginationDto {
    pub total_pages: u32,
}

impl VersesResponse {
    pub(crate) fn into_page(self, chapter_id: u16, page: u32) -> VersePage {
        VersePage {
            chapter_id,
            verses: self
                .verses
                .into_iter()
                .map(|v| Verse {
                    verse_key: v.verse_key,
                    text_uthmani: v.text_uthmani,
                })
                .collect(),
            page,
            total_pages: self.pagination.total_pages,
        }
    }
}
