use tasklet_core::KeyValueStore;
use tasklet_core::error::StorageError;

fn local_storage()
-> Result<web_sys::Storage, StorageError>
{
  web_sys::window()
    .and_then(|window| {
      window
        .local_storage()
        .ok()
        .flatten()
    })
    .ok_or_else(|| {
      StorageError::Unavailable(
        "window.localStorage is not \
         accessible"
          .to_string()
      )
    })
}

/// `window.localStorage`, looked up on
/// every access.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
  fn get_item(
    &self,
    key: &str
  ) -> Result<Option<String>, StorageError>
  {
    local_storage()?
      .get_item(key)
      .map_err(|error| {
        StorageError::Unavailable(
          format!("{error:?}")
        )
      })
  }

  fn set_item(
    &mut self,
    key: &str,
    value: &str
  ) -> Result<(), StorageError> {
    local_storage()?
      .set_item(key, value)
      .map_err(|error| {
        StorageError::WriteRejected {
          key:    key.to_string(),
          reason: format!("{error:?}")
        }
      })
  }
}
