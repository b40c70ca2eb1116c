use std::sync::atomic::Ordering;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{
    group_skills_by_category, BlogPost, Education, Experience, Profile, Project, SkillCategory,
};
use crate::pagination::Paginator;
use crate::state::AppState;

/// Default window sizes per section, matching the site's layouts:
/// three project cards, four blog cards, one skill category at a time.
pub const PROJECTS_PER_PAGE: usize = 3;
pub const BLOGS_PER_PAGE: usize = 4;
pub const SKILL_CATEGORIES_PER_PAGE: usize = 1;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

/// One page of a listing section plus the cursor facts a client needs to
/// render prev/next controls.
#[derive(Debug, Serialize)]
pub struct PagedResponse<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub max_page: usize,
    pub per_page: usize,
    pub total: usize,
}

/// Builds one page over `items`. An out-of-range `page` is clamped into the
/// valid range — boundary requests are normal states, not errors. Only a
/// `per_page` of zero is rejected.
fn page_of<T: Clone>(
    items: &[T],
    query: &PageQuery,
    default_per_page: usize,
) -> Result<PagedResponse<T>, AppError> {
    let per_page = query.per_page.unwrap_or(default_per_page);
    let mut pager = Paginator::new(items, per_page)
        .map_err(|e| AppError::Validation(e.to_string()))?;
    pager.set_page(query.page.unwrap_or(1));

    Ok(PagedResponse {
        items: pager.current_items().to_vec(),
        page: pager.current_page(),
        max_page: pager.max_page(),
        per_page: pager.page_size(),
        total: pager.total_items(),
    })
}

/// GET /api/v1/profile
pub async fn handle_get_profile(State(state): State<AppState>) -> Json<Profile> {
    Json(state.content.profile.clone())
}

/// GET /api/v1/projects?page=N[&per_page=M]
pub async fn handle_list_projects(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PagedResponse<Project>>, AppError> {
    Ok(Json(page_of(
        &state.content.projects,
        &query,
        PROJECTS_PER_PAGE,
    )?))
}

/// GET /api/v1/blogs?page=N[&per_page=M]
pub async fn handle_list_blogs(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PagedResponse<BlogPost>>, AppError> {
    Ok(Json(page_of(&state.content.blogs, &query, BLOGS_PER_PAGE)?))
}

/// GET /api/v1/skills?page=N
/// Pages over skill *categories*, one category per page by default.
pub async fn handle_list_skills(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PagedResponse<SkillCategory>>, AppError> {
    let categories = group_skills_by_category(&state.content.skills);
    Ok(Json(page_of(
        &categories,
        &query,
        SKILL_CATEGORIES_PER_PAGE,
    )?))
}

/// GET /api/v1/experience
pub async fn handle_list_experience(State(state): State<AppState>) -> Json<Vec<Experience>> {
    Json(state.content.experiences.clone())
}

/// GET /api/v1/education
pub async fn handle_list_education(State(state): State<AppState>) -> Json<Vec<Education>> {
    Json(state.content.education.clone())
}

#[derive(Debug, Serialize)]
pub struct SpotlightResponse {
    pub index: usize,
    pub project: Project,
}

/// GET /api/v1/projects/spotlight
/// The project currently under the auto-rotating spotlight.
pub async fn handle_get_spotlight(
    State(state): State<AppState>,
) -> Result<Json<SpotlightResponse>, AppError> {
    let projects = &state.content.projects;
    if projects.is_empty() {
        return Err(AppError::NotFound("No projects to spotlight".to_string()));
    }
    // The rotator only ever publishes in-range indexes; clamp anyway so a
    // shorter override document cannot panic the handler.
    let index = state.spotlight.load(Ordering::Relaxed).min(projects.len() - 1);
    Ok(Json(SpotlightResponse {
        index,
        project: projects[index].clone(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<usize>, per_page: Option<usize>) -> PageQuery {
        PageQuery { page, per_page }
    }

    #[test]
    fn test_page_of_first_page_defaults() {
        let items: Vec<u32> = (0..7).collect();
        let page = page_of(&items, &query(None, None), 3).unwrap();
        assert_eq!(page.items, vec![0, 1, 2]);
        assert_eq!(page.page, 1);
        assert_eq!(page.max_page, 3);
        assert_eq!(page.total, 7);
    }

    #[test]
    fn test_page_of_clamps_out_of_range_request() {
        let items: Vec<u32> = (0..7).collect();
        let page = page_of(&items, &query(Some(50), None), 3).unwrap();
        assert_eq!(page.page, 3);
        assert_eq!(page.items, vec![6]);
    }

    #[test]
    fn test_page_of_rejects_zero_per_page() {
        let items: Vec<u32> = (0..7).collect();
        let err = page_of(&items, &query(None, Some(0)), 3).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_page_of_empty_collection() {
        let items: Vec<u32> = vec![];
        let page = page_of(&items, &query(None, None), 4).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.max_page, 1);
        assert_eq!(page.total, 0);
    }
}
