// Use case: phonebook_info.

use crate::application::context::AppContext;
use crate::application::shared::person_errors::PersonUseCaseError;
use crate::domain::value_objects::timestamps::Timestamp;

/// Summary shown on the info page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonebookInfo {
    pub count: i64,
    pub generated_at: Timestamp,
}

impl PhonebookInfo {
    /// Render the summary as the HTML fragment served at `/info`.
    pub fn to_html(&self) -> String {
        format!(
            "<p>Phonebook has info for {} people</p>\n<p>{}</p>\n",
            self.count,
            self.generated_at.to_info_string()
        )
    }
}

/// Counts stored persons and stamps the current server time.
pub struct PhonebookInfoUseCase;

impl PhonebookInfoUseCase {
    pub async fn execute(ctx: &AppContext) -> Result<PhonebookInfo, PersonUseCaseError> {
        let generated_at = Timestamp::now_utc();
        let count = ctx.repos.person.count().await?;
        Ok(PhonebookInfo {
            count,
            generated_at,
        })
    }
}
