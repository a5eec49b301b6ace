use contact_phone_resolver::directory::ContactDirectory;
use contact_phone_resolver::domain::{ContactId, ContactRecord, PhoneRecord, PhoneType};
use contact_phone_resolver::error::{DirectoryError, DirectoryResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact directory for testing.
///
/// Serves canned contact rows, phone rows and number-to-name mappings,
/// records every call with its argument, and can be told to fail.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockDirectory {
    contacts: Arc<Mutex<Vec<ContactRecord>>>,
    phones: Arc<Mutex<HashMap<ContactId, Vec<PhoneRecord>>>>,
    names: Arc<Mutex<HashMap<String, String>>>,
    calls: Arc<Mutex<Vec<(String, String)>>>,
    unavailable: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a contact row returned by every `find_contacts` call.
    pub fn add_record(&self, record: ContactRecord) {
        self.contacts.lock().unwrap().push(record);
    }

    /// Add a complete contact with its phones.
    pub fn add_contact(&self, id: &str, name: &str, phones: Vec<PhoneRecord>) {
        let id = ContactId::new(id).unwrap();
        self.add_record(ContactRecord::new(id.clone(), name));
        self.phones.lock().unwrap().insert(id, phones);
    }

    /// Map a `name_for_number` key to a display name.
    pub fn map_name(&self, key: &str, name: &str) {
        self.names
            .lock()
            .unwrap()
            .insert(key.to_string(), name.to_string());
    }

    /// Make every fallible call return `DirectoryError::Unavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.lock().unwrap() = unavailable;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| name == method)
            .count()
    }

    /// Total number of calls across all methods.
    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Arguments passed to `method`, in call order.
    pub fn call_args(&self, method: &str) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| name == method)
            .map(|(_, arg)| arg.clone())
            .collect()
    }

    fn track_call(&self, method: &str, arg: &str) -> DirectoryResult<()> {
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), arg.to_string()));

        if *self.unavailable.lock().unwrap() {
            return Err(DirectoryError::Unavailable("mock offline".to_string()));
        }
        Ok(())
    }
}

impl ContactDirectory for MockDirectory {
    fn find_contacts(&self, query: &str) -> DirectoryResult<Vec<ContactRecord>> {
        self.track_call("find_contacts", query)?;
        Ok(self.contacts.lock().unwrap().clone())
    }

    fn phones_for_contact(&self, id: &ContactId) -> DirectoryResult<Vec<PhoneRecord>> {
        self.track_call("phones_for_contact", id.as_str())?;
        Ok(self
            .phones
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .unwrap_or_default())
    }

    fn name_for_number(&self, number: &str) -> DirectoryResult<String> {
        self.track_call("name_for_number", number)?;
        Ok(self
            .names
            .lock()
            .unwrap()
            .get(number)
            .cloned()
            .unwrap_or_else(|| number.to_string()))
    }

    fn display_label_for_type(&self, phone_type: PhoneType) -> String {
        self.calls
            .lock()
            .unwrap()
            .push(("display_label_for_type".to_string(), phone_type.to_string()));
        format!("label-{}", phone_type)
    }
}
