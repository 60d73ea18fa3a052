//! Database repository for recipes.
//!
//! All three read paths live here: the aggregated detail lookup, the sorted
//! and filtered listing, and the ingredient-match search.

use crate::api::models::recipes::SortKey;
use crate::db::errors::Result;
use crate::db::models::recipes::{RecipeDetailRow, RecipeMatchRow, RecipeSummaryRow};
use crate::types::RecipeId;
use sqlx::PgConnection;
use tracing::instrument;

/// Filter for listing recipes
#[derive(Debug, Clone)]
pub struct RecipeFilter {
    pub sort: SortKey,
    /// Case-insensitive substring match on the recipe description
    pub tag: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

/// Escape LIKE wildcard characters so caller input is matched literally.
fn escape_like(input: &str) -> String {
    input.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

// Steps and ingredients are inner joins: a recipe without any instruction or
// ingredient row is invisible to the detail endpoint. Comments are a left
// join, so unrated recipes still appear with comments NULL.
const DETAIL_QUERY: &str = r#"
WITH steps AS (
    SELECT recipe_id, ARRAY_AGG(step_name) AS steps
    FROM instructions
    GROUP BY recipe_id
),
comments AS (
    SELECT recipe_id, ARRAY_AGG(recipe_comment) AS comments
    FROM recipe_rating
    GROUP BY recipe_id
),
ingre AS (
    SELECT recipe_id, ARRAY_AGG(ingredient_name) AS ingredients
    FROM ingredients
    GROUP BY recipe_id
)
SELECT recipe.recipe_id, recipe.recipe_name, recipe.total_time, recipe.servings,
       recipe.spicelevel, recipe.cookinglevel, recipe.recipe_description,
       ingre.ingredients, steps.steps, comments.comments
FROM recipe
JOIN steps ON steps.recipe_id = recipe.recipe_id
LEFT JOIN comments ON comments.recipe_id = recipe.recipe_id
JOIN ingre ON ingre.recipe_id = recipe.recipe_id
WHERE recipe.recipe_id = $1
"#;

pub struct Recipes<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Recipes<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Fetch the aggregated detail view for one recipe.
    #[instrument(skip(self), err)]
    pub async fn get_detail(&mut self, id: RecipeId) -> Result<Option<RecipeDetailRow>> {
        let row = sqlx::query_as::<_, RecipeDetailRow>(DETAIL_QUERY)
            .bind(id)
            .fetch_optional(&mut *self.db)
            .await?;

        Ok(row)
    }

    /// List recipes ordered by the requested column ascending, with
    /// `recipe_id` as a deterministic tiebreak.
    #[instrument(skip(self, filter), fields(sort = ?filter.sort, limit = filter.limit, offset = filter.offset), err)]
    pub async fn list(&mut self, filter: &RecipeFilter) -> Result<Vec<RecipeSummaryRow>> {
        // The sort column comes from a closed enum, never from user input.
        let mut sql = String::from(
            "SELECT recipe_id, recipe_name, total_time, servings, spicelevel, cookinglevel, recipe_description
             FROM recipe",
        );
        let pattern = filter.tag.as_deref().map(|tag| format!("%{}%", escape_like(tag)));
        if pattern.is_some() {
            sql.push_str(" WHERE recipe_description ILIKE $3");
        }
        sql.push_str(&format!(" ORDER BY {} ASC, recipe_id ASC LIMIT $1 OFFSET $2", filter.sort.column()));

        let mut query = sqlx::query_as::<_, RecipeSummaryRow>(&sql).bind(filter.limit).bind(filter.offset);
        if let Some(pattern) = pattern {
            query = query.bind(pattern);
        }

        let rows = query.fetch_all(&mut *self.db).await?;
        Ok(rows)
    }

    /// Rank recipes by how many of their ingredient rows have a
    /// `core_ingredient` in `tokens`. Frequency counts matching rows, not
    /// distinct tokens; tie order beyond frequency is unspecified.
    #[instrument(skip(self, tokens), fields(token_count = tokens.len()), err)]
    pub async fn find_by_ingredients(&mut self, tokens: &[String]) -> Result<Vec<RecipeMatchRow>> {
        let rows = sqlx::query_as::<_, RecipeMatchRow>(
            r#"
            SELECT ingredients.recipe_id, recipe.recipe_name, COUNT(*) AS frequency
            FROM ingredients
            JOIN recipe ON ingredients.recipe_id = recipe.recipe_id
            WHERE ingredients.core_ingredient = ANY($1)
            GROUP BY ingredients.recipe_id, recipe.recipe_name
            ORDER BY frequency DESC
            "#,
        )
        .bind(tokens)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{seed_ingredient, seed_rating, seed_recipe, seed_step, seed_user};
    use sqlx::PgPool;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }

    async fn seed_listable_recipes(pool: &PgPool) -> Vec<i32> {
        let user_id = seed_user(pool, "chef").await;
        // total_time values chosen so the sort order differs from insertion
        // order; two recipes tie on total_time to exercise the id tiebreak.
        let a = seed_recipe(pool, user_id, "Curry", 45, 4, 3, 2, "a spicy curry").await;
        let b = seed_recipe(pool, user_id, "Toast", 5, 1, 0, 0, "quick breakfast toast").await;
        let c = seed_recipe(pool, user_id, "Soup", 45, 2, 1, 1, "a warm soup").await;
        vec![a, b, c]
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_list_sorts_with_id_tiebreak(pool: PgPool) {
        let ids = seed_listable_recipes(&pool).await;

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Recipes::new(&mut conn);

        let rows = repo
            .list(&RecipeFilter {
                sort: SortKey::TotalTime,
                tag: None,
                limit: 50,
                offset: 0,
            })
            .await
            .unwrap();

        let times: Vec<i32> = rows.iter().map(|r| r.total_time).collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]), "not sorted: {times:?}");
        // Curry (ids[0]) and Soup (ids[2]) tie on total_time; the lower id wins
        let row_ids: Vec<i32> = rows.iter().map(|r| r.recipe_id).collect();
        assert_eq!(row_ids, vec![ids[1], ids[0], ids[2]]);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_list_pagination_slices_full_ordering(pool: PgPool) {
        seed_listable_recipes(&pool).await;

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Recipes::new(&mut conn);

        let full = repo
            .list(&RecipeFilter {
                sort: SortKey::Servings,
                tag: None,
                limit: 50,
                offset: 0,
            })
            .await
            .unwrap();
        let page = repo
            .list(&RecipeFilter {
                sort: SortKey::Servings,
                tag: None,
                limit: 2,
                offset: 1,
            })
            .await
            .unwrap();

        let full_ids: Vec<i32> = full.iter().map(|r| r.recipe_id).collect();
        let page_ids: Vec<i32> = page.iter().map(|r| r.recipe_id).collect();
        assert_eq!(page_ids, full_ids[1..3].to_vec());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_list_tag_filters_literally(pool: PgPool) {
        let user_id = seed_user(&pool, "chef").await;
        seed_recipe(&pool, user_id, "Deal", 10, 1, 0, 0, "50%_off special").await;
        seed_recipe(&pool, user_id, "Trap", 10, 1, 0, 0, "500 offers daily").await;

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Recipes::new(&mut conn);

        // Unescaped, "50%_off" would also match "500 offers" through the
        // wildcards; escaped, only the literal description matches.
        let rows = repo
            .list(&RecipeFilter {
                sort: SortKey::TotalTime,
                tag: Some("50%_off".to_string()),
                limit: 50,
                offset: 0,
            })
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].recipe_name, "Deal");

        // Case-insensitive substring semantics
        let rows = repo
            .list(&RecipeFilter {
                sort: SortKey::TotalTime,
                tag: Some("SPECIAL".to_string()),
                limit: 50,
                offset: 0,
            })
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_find_by_ingredients_orders_by_match_rows(pool: PgPool) {
        let user_id = seed_user(&pool, "chef").await;
        let soup = seed_recipe(&pool, user_id, "Soup", 30, 2, 1, 1, "a warm soup").await;
        let stew = seed_recipe(&pool, user_id, "Stew", 60, 4, 1, 2, "a hearty stew").await;
        // Soup has two salt rows: frequency counts rows, not distinct tokens
        seed_ingredient(&pool, soup, "sea salt", "salt").await;
        seed_ingredient(&pool, soup, "black pepper", "pepper").await;
        seed_ingredient(&pool, soup, "table salt", "salt").await;
        seed_ingredient(&pool, stew, "rock salt", "salt").await;
        seed_ingredient(&pool, stew, "beef", "beef").await;

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Recipes::new(&mut conn);

        let rows = repo.find_by_ingredients(&["salt".to_string()]).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].recipe_id, soup);
        assert_eq!(rows[0].frequency, 2);
        assert_eq!(rows[1].recipe_id, stew);
        assert_eq!(rows[1].frequency, 1);

        // Only recipes with at least one matching row come back
        let rows = repo.find_by_ingredients(&["saffron".to_string()]).await.unwrap();
        assert!(rows.is_empty());
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_get_detail_aggregates(pool: PgPool) {
        let user_id = seed_user(&pool, "chef").await;
        let recipe_id = seed_recipe(&pool, user_id, "Soup", 30, 2, 1, 1, "a warm soup").await;
        seed_step(&pool, recipe_id, "chop vegetables").await;
        seed_step(&pool, recipe_id, "simmer for 20 minutes").await;
        seed_ingredient(&pool, recipe_id, "sea salt", "salt").await;

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Recipes::new(&mut conn);

        let row = repo.get_detail(recipe_id).await.unwrap().expect("recipe should be visible");
        assert_eq!(row.recipe_name, "Soup");
        assert_eq!(row.steps.len(), 2);
        assert_eq!(row.ingredients, vec!["sea salt".to_string()]);
        // No ratings yet: the left join leaves comments NULL
        assert_eq!(row.comments, None);

        seed_rating(&pool, user_id, recipe_id, 5, "delicious").await;
        let row = repo.get_detail(recipe_id).await.unwrap().unwrap();
        assert_eq!(row.comments, Some(vec!["delicious".to_string()]));
    }

    #[sqlx::test]
    #[test_log::test]
    async fn test_get_detail_excludes_recipe_without_steps(pool: PgPool) {
        let user_id = seed_user(&pool, "chef").await;
        let recipe_id = seed_recipe(&pool, user_id, "Ghost", 10, 1, 0, 0, "never instructed").await;
        seed_ingredient(&pool, recipe_id, "air", "air").await;

        let mut conn = pool.acquire().await.unwrap();
        let mut repo = Recipes::new(&mut conn);

        // The recipe row exists, but the inner join on instructions hides it
        let row = repo.get_detail(recipe_id).await.unwrap();
        assert!(row.is_none());
    }
}
