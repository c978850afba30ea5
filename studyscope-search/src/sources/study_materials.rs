//! Study-material source: PDF documents and slide decks.
//!
//! Two Custom Search sub-queries run concurrently, one qualified with
//! `filetype:pdf` and one with `filetype:ppt OR filetype:pptx`. Results
//! stay grouped by document type.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::source::Source;
use crate::types::{SourceKind, SourcePayload, StudyMaterials};

use super::{settle_subqueries, SubQuery};

/// PDF and presentation search source.
pub struct StudyMaterialsSource;

impl StudyMaterialsSource {
    /// The two sub-queries issued for `query`, PDF first.
    pub(crate) fn subqueries(query: &str, config: &SearchConfig) -> [SubQuery; 2] {
        let num = config.limits.study_materials;
        [
            SubQuery {
                label: "pdf",
                query: pdf_query(query),
                num,
            },
            SubQuery {
                label: "presentations",
                query: presentation_query(query),
                num,
            },
        ]
    }
}

/// `<query> filetype:pdf`
pub fn pdf_query(query: &str) -> String {
    format!("{query} filetype:pdf")
}

/// `<query> filetype:ppt OR filetype:pptx`
pub fn presentation_query(query: &str) -> String {
    format!("{query} filetype:ppt OR filetype:pptx")
}

impl Source for StudyMaterialsSource {
    async fn fetch(
        &self,
        client: &reqwest::Client,
        query: &str,
        config: &SearchConfig,
    ) -> Result<SourcePayload, SearchError> {
        let subqueries = Self::subqueries(query, config);
        let mut groups = settle_subqueries(client, config, &subqueries)
            .await?
            .into_iter();

        let pdfs = groups.next().unwrap_or_default();
        let presentations = groups.next().unwrap_or_default();
        Ok(SourcePayload::StudyMaterials(StudyMaterials {
            pdfs,
            presentations,
        }))
    }

    fn kind(&self) -> SourceKind {
        SourceKind::StudyMaterials
    }

    fn request_count(&self) -> usize {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_transforms() {
        assert_eq!(pdf_query("photosynthesis"), "photosynthesis filetype:pdf");
        assert_eq!(
            presentation_query("photosynthesis"),
            "photosynthesis filetype:ppt OR filetype:pptx"
        );
    }

    #[test]
    fn subqueries_use_study_material_cap() {
        let mut config = SearchConfig::default();
        config.limits.study_materials = 4;
        let subqueries = StudyMaterialsSource::subqueries("cells", &config);
        assert_eq!(subqueries[0].label, "pdf");
        assert_eq!(subqueries[1].label, "presentations");
        assert!(subqueries.iter().all(|sq| sq.num == 4));
    }

    #[test]
    fn issues_two_requests() {
        assert_eq!(StudyMaterialsSource.request_count(), 2);
        assert_eq!(StudyMaterialsSource.kind(), SourceKind::StudyMaterials);
    }

    #[tokio::test]
    async fn missing_credentials_fail_before_requests() {
        let client = reqwest::Client::new();
        let err = StudyMaterialsSource
            .fetch(&client, "cells", &SearchConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::MissingCredential(_)));
    }
}
