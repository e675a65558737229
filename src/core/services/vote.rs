use crate::core::ports::repository::{ChoiceCommon, Store};
use crate::error::Error;

pub const NO_CHOICE_MESSAGE: &str = "You didn't select a choice.";

pub async fn cast_vote<S>(store: &S, question_id: i64, selection: Option<i64>) -> Result<(), Error>
where
    S: Store,
{
    let choice_id = selection.ok_or_else(|| Error::Validation(NO_CHOICE_MESSAGE.into()))?;
    // one server-side increment; the affected-row count doubles as the
    // check that the choice belongs to the question
    let updated = ChoiceCommon::add_vote(store, question_id, choice_id).await?;
    if updated == 0 {
        return Err(Error::Validation(NO_CHOICE_MESSAGE.into()));
    }
    Ok(())
}
