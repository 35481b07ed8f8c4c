//! Maps raw backend payloads into the unified [`ResearchRecord`].
//!
//! Each variant decodes its metadata into its own struct and copies fields
//! by its own table. Field names differ between variants on the backend
//! (`cited_count` vs `cited_by_count`, `works_count` vs `work_count`), so the
//! tables must stay separate.

use anyhow::Context;
use common::{
    search_result::{Coordinate, NamedCount, Pagination, ResearchRecord},
    search_variant::SearchVariant,
};
use serde::de::DeserializeOwned;

use super::raw_response::{
    AllThreeMetadata, InstitutionMetadata, LooseNumber, LooseText, RawCoordinate, RawGraphResponse, RawPagination, RawPair, RawSearchResponse,
    ResearcherInstitutionMetadata, ResearcherMetadata, TopicInstitutionMetadata, TopicMetadata, TopicResearcherMetadata,
};

pub fn normalize_search_response(variant: SearchVariant, raw: RawSearchResponse, has_extra_institutions: bool) -> anyhow::Result<ResearchRecord> {
    let metadata = raw.metadata.unwrap_or(serde_json::Value::Null);
    let list = pairs(raw.list);
    let mut record = match variant {
        SearchVariant::Institution => {
            let mut record = institution_record(decode_metadata::<InstitutionMetadata>(variant, metadata)?);
            record.topics = list;
            record.has_multiple_institutions = has_extra_institutions;
            for (name, extra) in raw.extra_metadata.unwrap_or_default() {
                let extra = decode_metadata::<InstitutionMetadata>(variant, extra).with_context(|| format!("extra_metadata for {}", name))?;
                record.all_institution_metadata.insert(name, institution_record(extra));
            }
            record
        }
        SearchVariant::Topic => {
            let m = decode_metadata::<TopicMetadata>(variant, metadata)?;
            ResearchRecord {
                topic_name: m.name.into(),
                topic_clusters: texts(m.topic_clusters),
                cited_count: m.cited_by_count.into(),
                author_count: m.researchers.into(),
                works_count: m.work_count.into(),
                open_alex_link: m.oa_link.into(),
                organizations: list,
                coordinates: coordinates(raw.coordinates),
                ..Default::default()
            }
        }
        SearchVariant::Researcher => {
            let m = decode_metadata::<ResearcherMetadata>(variant, metadata)?;
            ResearchRecord {
                institution_name: m.current_institution.into(),
                researcher_name: m.name.into(),
                orcid_link: m.orcid.into(),
                cited_count: m.cited_by_count.into(),
                works_count: m.work_count.into(),
                open_alex_link: m.oa_link.into(),
                topics: list,
                institution_url: m.institution_url.into(),
                ..Default::default()
            }
        }
        SearchVariant::ResearcherInstitution => {
            let m = decode_metadata::<ResearcherInstitutionMetadata>(variant, metadata)?;
            ResearchRecord {
                topics: list,
                institution_url: m.homepage.into(),
                institution_name: m.institution_name.into(),
                researcher_name: m.researcher_name.into(),
                orcid_link: m.orcid.into(),
                works_count: m.work_count.into(),
                cited_count: m.cited_by_count.into(),
                ror_link: m.ror.into(),
                open_alex_link: m.institution_oa_link.into(),
                researcher_open_alex_link: m.researcher_oa_link.into(),
                ..Default::default()
            }
        }
        SearchVariant::TopicResearcher => {
            let m = decode_metadata::<TopicResearcherMetadata>(variant, metadata)?;
            ResearchRecord {
                works: list,
                institution_name: m.current_institution.into(),
                topic_name: m.topic_name.into(),
                researcher_name: m.researcher_name.into(),
                orcid_link: m.orcid.into(),
                works_count: m.work_count.into(),
                cited_count: m.cited_by_count.into(),
                open_alex_link: m.topic_oa_link.into(),
                researcher_open_alex_link: m.researcher_oa_link.into(),
                topic_clusters: texts(m.topic_clusters),
                ..Default::default()
            }
        }
        SearchVariant::TopicInstitution => {
            let m = decode_metadata::<TopicInstitutionMetadata>(variant, metadata)?;
            ResearchRecord {
                institution_name: m.institution_name.into(),
                topic_name: m.topic_name.into(),
                institution_url: m.homepage.into(),
                cited_count: m.cited_by_count.into(),
                works_count: m.work_count.into(),
                author_count: m.people_count.into(),
                open_alex_link: m.institution_oa_link.into(),
                topic_open_alex_link: m.topic_oa_link.into(),
                ror_link: m.ror.into(),
                topic_clusters: texts(m.topic_clusters),
                authors: list,
                ..Default::default()
            }
        }
        SearchVariant::AllThree => {
            let m = decode_metadata::<AllThreeMetadata>(variant, metadata)?;
            ResearchRecord {
                works: list,
                institution_url: m.homepage.into(),
                institution_name: m.institution_name.into(),
                researcher_name: m.researcher_name.into(),
                topic_name: m.topic_name.into(),
                orcid_link: m.orcid.into(),
                works_count: m.work_count.into(),
                cited_count: m.cited_by_count.into(),
                ror_link: m.ror.into(),
                open_alex_link: m.institution_oa_link.into(),
                topic_open_alex_link: m.topic_oa_link.into(),
                researcher_open_alex_link: m.researcher_oa_link.into(),
                topic_clusters: texts(m.topic_clusters),
                ..Default::default()
            }
        }
    };
    record.graph = raw.graph;
    record.search = Some(variant);
    Ok(record)
}

/// Highest page number taken from a response; anything above is clamped.
const MAX_PAGE: u32 = 1_000_000;

/// Page position from `metadata_pagination`, one page when absent.
/// The current page is kept within `1..=total_pages`.
pub fn normalize_pagination(raw: Option<&RawPagination>) -> Pagination {
    let page = |n: Option<&LooseNumber>| {
        n.map(|n| n.0).filter(|x| x.is_finite() && *x >= 1.0).map(|x| x.min(MAX_PAGE as f64) as u32).unwrap_or(1)
    };
    let Some(raw) = raw else { return Pagination::default() };
    let total_pages = page(raw.total_pages.as_ref());
    let current_page = page(raw.current_page.as_ref()).min(total_pages);
    Pagination { current_page, total_pages }
}

pub fn normalize_default_graph(raw: RawGraphResponse) -> ResearchRecord {
    ResearchRecord { graph: raw.graph, ..Default::default() }
}

fn institution_record(m: InstitutionMetadata) -> ResearchRecord {
    ResearchRecord {
        institution_name: m.name.into(),
        is_hbcu: m.hbcu.0,
        cited_count: m.cited_count.into(),
        author_count: m.author_count.into(),
        works_count: m.works_count.into(),
        institution_url: m.homepage.into(),
        open_alex_link: m.oa_link.into(),
        ror_link: m.ror.into(),
        ..Default::default()
    }
}

fn decode_metadata<T: DeserializeOwned + Default>(variant: SearchVariant, metadata: serde_json::Value) -> anyhow::Result<T> {
    if metadata.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(metadata).with_context(|| format!("Unexpected metadata shape for {} search", variant))
}

fn pairs(list: Option<Vec<RawPair>>) -> Vec<NamedCount> {
    list.unwrap_or_default().into_iter().map(|RawPair(name, count)| NamedCount::new(name.0, count.0)).collect()
}

fn texts(values: Option<Vec<LooseText>>) -> Vec<String> {
    values.unwrap_or_default().into_iter().map(String::from).collect()
}

fn coordinates(values: Option<Vec<RawCoordinate>>) -> Vec<Coordinate> {
    values
        .unwrap_or_default()
        .into_iter()
        .map(|c| match c {
            RawCoordinate::Object { name, lat, lng } | RawCoordinate::Row(name, lat, lng) => Coordinate { name: name.0, lat: lat.0, lng: lng.0 },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use common::search_result::GraphValue;
    use serde_json::json;

    use super::*;

    fn raw(value: serde_json::Value) -> RawSearchResponse {
        serde_json::from_value(value).unwrap()
    }

    fn graph() -> serde_json::Value {
        json!({"nodes": [{"id": "I1", "label": "Georgia Tech", "type": "INSTITUTION"}], "edges": []})
    }

    #[test]
    fn institution_mapping() {
        let response = raw(json!({
            "metadata": {
                "name": "Georgia Institute of Technology",
                "hbcu": false,
                "cited_count": 1_200_000,
                "author_count": "8000",
                "works_count": 95000,
                "homepage": "https://www.gatech.edu",
                "oa_link": "https://openalex.org/I130701444",
                "ror": "https://ror.org/01zkghx44",
                "cited_by_count": 1
            },
            "list": [["Artificial Intelligence", 420], ["Optics", "12"]],
            "graph": graph()
        }));
        let record = normalize_search_response(SearchVariant::Institution, response, false).unwrap();
        assert_eq!(record.search, Some(SearchVariant::Institution));
        assert_eq!(record.institution_name, "Georgia Institute of Technology");
        assert_eq!(record.cited_count, "1200000");
        assert_eq!(record.author_count, "8000");
        assert_eq!(record.works_count, "95000");
        assert_eq!(record.institution_url, "https://www.gatech.edu");
        assert_eq!(record.open_alex_link, "https://openalex.org/I130701444");
        assert_eq!(record.ror_link, "https://ror.org/01zkghx44");
        assert_eq!(record.topics, vec![NamedCount::new("Artificial Intelligence", "420"), NamedCount::new("Optics", "12")]);
        assert!(record.works.is_empty());
        assert!(record.organizations.is_empty());
        assert!(!record.has_multiple_institutions);
        assert_eq!(record.graph.unwrap().nodes[0].id, GraphValue::Text("I1".to_string()));
    }

    #[test]
    fn institution_with_extra_institutions() {
        let response = raw(json!({
            "metadata": {"name": "Spelman College", "hbcu": 1},
            "graph": graph(),
            "extra_metadata": {
                "Morehouse College": {"name": "Morehouse College", "hbcu": "true", "works_count": 10}
            }
        }));
        let record = normalize_search_response(SearchVariant::Institution, response, true).unwrap();
        assert!(record.is_hbcu);
        assert!(record.has_multiple_institutions);
        let extra = &record.all_institution_metadata["Morehouse College"];
        assert!(extra.is_hbcu);
        assert_eq!(extra.works_count, "10");
    }

    #[test]
    fn topic_mapping_uses_cited_by_count_and_coordinates() {
        let response = raw(json!({
            "metadata": {
                "name": "Machine Learning",
                "topic_clusters": ["Deep Learning", "Reinforcement Learning"],
                "cited_by_count": 5000,
                "cited_count": 1,
                "researchers": 300,
                "work_count": 4200,
                "oa_link": "https://openalex.org/subfields/1702"
            },
            "list": [["Georgia Tech", 120]],
            "graph": graph(),
            "coordinates": [
                {"name": "Georgia Tech", "lat": 33.77, "lng": "-84.39"},
                ["Emory University", 33.79, -84.32]
            ]
        }));
        let record = normalize_search_response(SearchVariant::Topic, response, false).unwrap();
        assert_eq!(record.topic_name, "Machine Learning");
        assert_eq!(record.cited_count, "5000");
        assert_eq!(record.author_count, "300");
        assert_eq!(record.works_count, "4200");
        assert_eq!(record.topic_clusters, vec!["Deep Learning", "Reinforcement Learning"]);
        assert_eq!(record.organizations, vec![NamedCount::new("Georgia Tech", "120")]);
        assert!(record.topics.is_empty());
        assert_eq!(record.coordinates.len(), 2);
        assert_eq!(record.coordinates[0].lng, -84.39);
        assert_eq!(record.coordinates[1].name, "Emory University");
    }

    #[test]
    fn researcher_mapping() {
        let response = raw(json!({
            "metadata": {
                "name": "Jane Doe",
                "current_institution": "Georgia Tech",
                "orcid": null,
                "cited_by_count": 77,
                "work_count": 12,
                "oa_link": "https://openalex.org/A1",
                "institution_url": "https://openalex.org/I1"
            },
            "list": [["Optics", 3]],
            "graph": graph()
        }));
        let record = normalize_search_response(SearchVariant::Researcher, response, false).unwrap();
        assert_eq!(record.researcher_name, "Jane Doe");
        assert_eq!(record.institution_name, "Georgia Tech");
        assert_eq!(record.orcid_link, "");
        assert_eq!(record.cited_count, "77");
        assert_eq!(record.institution_url, "https://openalex.org/I1");
        assert_eq!(record.topics.len(), 1);
    }

    #[test]
    fn two_entity_mappings_route_lists_differently() {
        let metadata = json!({
            "institution_name": "Georgia Tech",
            "topic_name": "Optics",
            "researcher_name": "Jane Doe",
            "current_institution": "Emory University",
            "homepage": "https://www.gatech.edu",
            "work_count": 10,
            "cited_by_count": 20,
            "people_count": 30,
            "ror": "https://ror.org/01zkghx44",
            "institution_oa_link": "https://openalex.org/I1",
            "topic_oa_link": "https://openalex.org/T1",
            "researcher_oa_link": "https://openalex.org/A1",
            "orcid": "https://orcid.org/0000-0001",
            "topic_clusters": ["Lasers"]
        });
        let body = || raw(json!({"metadata": metadata.clone(), "list": [["Row", 1]], "graph": graph()}));

        let ri = normalize_search_response(SearchVariant::ResearcherInstitution, body(), false).unwrap();
        assert_eq!(ri.topics.len(), 1);
        assert_eq!(ri.institution_name, "Georgia Tech");
        assert_eq!(ri.open_alex_link, "https://openalex.org/I1");
        assert_eq!(ri.researcher_open_alex_link, "https://openalex.org/A1");
        assert!(ri.topic_clusters.is_empty());

        let tr = normalize_search_response(SearchVariant::TopicResearcher, body(), false).unwrap();
        assert_eq!(tr.works.len(), 1);
        assert_eq!(tr.institution_name, "Emory University");
        assert_eq!(tr.open_alex_link, "https://openalex.org/T1");
        assert_eq!(tr.ror_link, "");
        assert_eq!(tr.topic_clusters, vec!["Lasers"]);

        let ti = normalize_search_response(SearchVariant::TopicInstitution, body(), false).unwrap();
        assert_eq!(ti.authors.len(), 1);
        assert_eq!(ti.author_count, "30");
        assert_eq!(ti.open_alex_link, "https://openalex.org/I1");
        assert_eq!(ti.topic_open_alex_link, "https://openalex.org/T1");
        assert_eq!(ti.researcher_name, "");

        let all = normalize_search_response(SearchVariant::AllThree, body(), false).unwrap();
        assert_eq!(all.works.len(), 1);
        assert_eq!(all.institution_name, "Georgia Tech");
        assert_eq!(all.researcher_name, "Jane Doe");
        assert_eq!(all.topic_name, "Optics");
        assert_eq!(all.orcid_link, "https://orcid.org/0000-0001");
        assert_eq!(all.author_count, "");
        assert_eq!(all.search, Some(SearchVariant::AllThree));
    }

    #[test]
    fn empty_body_gives_tagged_record_without_graph() {
        let record = normalize_search_response(SearchVariant::Researcher, raw(json!({})), false).unwrap();
        assert_eq!(record.search, Some(SearchVariant::Researcher));
        assert!(record.graph.is_none());
        assert_eq!(record.researcher_name, "");
    }

    #[test]
    fn malformed_shapes_are_rejected() {
        assert!(serde_json::from_value::<RawSearchResponse>(json!({"graph": "nope"})).is_err());
        assert!(serde_json::from_value::<RawSearchResponse>(json!({"list": [["only-one"]]})).is_err());
        assert!(serde_json::from_value::<RawSearchResponse>(json!([1, 2, 3])).is_err());

        let bad_metadata = raw(json!({"metadata": ["not", "an", "object"]}));
        assert!(normalize_search_response(SearchVariant::Topic, bad_metadata, false).is_err());

        let nested = raw(json!({"metadata": {"name": {"first": "Jane"}}}));
        assert!(normalize_search_response(SearchVariant::Researcher, nested, false).is_err());
    }

    #[test]
    fn same_payload_normalizes_identically() {
        let body = json!({"metadata": {"name": "Optics", "work_count": 3}, "graph": graph()});
        let a = normalize_search_response(SearchVariant::Topic, raw(body.clone()), false).unwrap();
        let b = normalize_search_response(SearchVariant::Topic, raw(body), false).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn pagination_defaults_to_one_page() {
        assert_eq!(normalize_pagination(None), Pagination::default());
        let p: RawPagination = serde_json::from_value(json!({"current_page": 2, "total_pages": "7"})).unwrap();
        assert_eq!(normalize_pagination(Some(&p)), Pagination { current_page: 2, total_pages: 7 });
        let zero: RawPagination = serde_json::from_value(json!({"current_page": 0, "total_pages": null})).unwrap();
        assert_eq!(normalize_pagination(Some(&zero)), Pagination::default());
    }

    #[test]
    fn oversized_pagination_is_clamped() {
        let huge: RawPagination = serde_json::from_value(json!({"current_page": 1e10, "total_pages": 1e10})).unwrap();
        let pagination = normalize_pagination(Some(&huge));
        assert_eq!(pagination, Pagination { current_page: MAX_PAGE, total_pages: MAX_PAGE });
        assert_eq!(pagination.next(), None);
        assert_eq!(pagination.previous(), Some(MAX_PAGE - 1));

        let past_end: RawPagination = serde_json::from_value(json!({"current_page": 9, "total_pages": 3})).unwrap();
        assert_eq!(normalize_pagination(Some(&past_end)), Pagination { current_page: 3, total_pages: 3 });
    }

    #[test]
    fn default_graph_record_has_only_a_graph() {
        let raw: RawGraphResponse = serde_json::from_value(json!({"graph": graph()})).unwrap();
        let record = normalize_default_graph(raw);
        assert!(record.graph.is_some());
        assert_eq!(record.search, None);
        assert_eq!(ResearchRecord { graph: None, ..record }, ResearchRecord::default());
    }
}
