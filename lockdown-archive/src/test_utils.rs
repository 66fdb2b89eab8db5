/*!
 Builders for small keyed archives used in tests.
*/

use plist::{Dictionary, Uid, Value};

use crate::{
    archive::{ARCHIVER, ARCHIVER_NAME, NS_OBJECTS, OBJECTS, ROOT, TOP, VERSION},
    items::keys::{
        ACCOUNT_NAME_KEY, ARCHIVED_KEY, DATE_CREATED_KEY, DATE_MODIFIED_KEY, FAVORITE_KEY,
        ITEM_KEY_KEY, ITEM_URL_KEY, SERVICE_NAME_KEY,
    },
    util::{dates::APPLE_EPOCH_OFFSET, plist::NULL_SENTINEL},
};

/// Fields of a single Lockdown item, as they are laid out in the archive
pub(crate) struct ItemSpec {
    pub service: &'static str,
    pub login: &'static str,
    pub created: f64,
    pub modified: Option<f64>,
    pub url: &'static str,
    pub secret: Option<&'static str>,
    pub favorite: bool,
    pub archived: bool,
}

impl ItemSpec {
    pub fn totp(service: &'static str, login: &'static str, secret: &'static str) -> Self {
        Self {
            service,
            login,
            created: 645_000_000.,
            modified: Some(646_000_000.25),
            url: "",
            secret: Some(secret),
            favorite: false,
            archived: false,
        }
    }

    pub fn passthrough(service: &'static str, url: &'static str) -> Self {
        Self {
            service,
            login: "",
            created: 645_000_000.,
            modified: None,
            url,
            secret: None,
            favorite: false,
            archived: false,
        }
    }
}

/// Builds a `$objects` array the way `NSKeyedArchiver` lays it out
pub(crate) struct ArchiveBuilder {
    objects: Vec<Value>,
    date_class: Option<Uid>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self {
            objects: vec![Value::String(NULL_SENTINEL.to_string())],
            date_class: None,
        }
    }

    pub fn null() -> Uid {
        Uid::new(0)
    }

    pub fn push(&mut self, value: Value) -> Uid {
        self.objects.push(value);
        Uid::new(self.objects.len() as u64 - 1)
    }

    pub fn string(&mut self, text: &str) -> Uid {
        self.push(Value::String(text.to_string()))
    }

    pub fn class(&mut self, name: &str) -> Uid {
        let mut class = Dictionary::new();
        class.insert(
            "$classname".to_string(),
            Value::String(name.to_string()),
        );
        class.insert(
            "$classes".to_string(),
            Value::Array(vec![
                Value::String(name.to_string()),
                Value::String("NSObject".to_string()),
            ]),
        );
        self.push(Value::Dictionary(class))
    }

    pub fn date(&mut self, seconds: f64) -> Uid {
        let class = match self.date_class {
            Some(class) => class,
            None => {
                let class = self.class("NSDate");
                self.date_class = Some(class);
                class
            }
        };
        let mut date = Dictionary::new();
        date.insert("NS.time".to_string(), Value::Real(seconds));
        date.insert("$class".to_string(), Value::Uid(class));
        self.push(Value::Dictionary(date))
    }

    /// Add an item dictionary, returning it so tests can tamper with it before pushing
    pub fn item_dict(&mut self, spec: &ItemSpec) -> Dictionary {
        let service = self.string(spec.service);
        let login = self.string(spec.login);
        let created = self.date(spec.created);
        let modified = match spec.modified {
            Some(seconds) => self.date(seconds),
            None => Self::null(),
        };
        let url = self.string(spec.url);

        let mut item = Dictionary::new();
        item.insert(ARCHIVED_KEY.to_string(), Value::Boolean(spec.archived));
        item.insert(FAVORITE_KEY.to_string(), Value::Boolean(spec.favorite));
        item.insert(SERVICE_NAME_KEY.to_string(), Value::Uid(service));
        item.insert(ACCOUNT_NAME_KEY.to_string(), Value::Uid(login));
        item.insert(DATE_CREATED_KEY.to_string(), Value::Uid(created));
        item.insert(DATE_MODIFIED_KEY.to_string(), Value::Uid(modified));
        item.insert(ITEM_URL_KEY.to_string(), Value::Uid(url));
        if let Some(secret) = spec.secret {
            let secret = self.string(secret);
            item.insert(ITEM_KEY_KEY.to_string(), Value::Uid(secret));
        }
        item
    }

    pub fn item(&mut self, spec: &ItemSpec) -> Uid {
        let item = self.item_dict(spec);
        self.push(Value::Dictionary(item))
    }

    pub fn objects(&self) -> &[Value] {
        &self.objects
    }

    /// Finish the archive with a root `NSArray` holding `members`
    pub fn build(mut self, members: Vec<Uid>) -> Value {
        let class = self.class("NSArray");
        let mut root = Dictionary::new();
        root.insert(
            NS_OBJECTS.to_string(),
            Value::Array(members.into_iter().map(Value::Uid).collect()),
        );
        root.insert("$class".to_string(), Value::Uid(class));
        let root = self.push(Value::Dictionary(root));
        self.build_with_root(root)
    }

    /// Finish the archive with `$top.root` pointing at an arbitrary object
    pub fn build_with_root(self, root: Uid) -> Value {
        let mut top = Dictionary::new();
        top.insert(ROOT.to_string(), Value::Uid(root));

        let mut archive = Dictionary::new();
        archive.insert(
            ARCHIVER.to_string(),
            Value::String(ARCHIVER_NAME.to_string()),
        );
        archive.insert(VERSION.to_string(), Value::Integer(100_000i64.into()));
        archive.insert(TOP.to_string(), Value::Dictionary(top));
        archive.insert(OBJECTS.to_string(), Value::Array(self.objects));
        Value::Dictionary(archive)
    }
}

/// Serialize a value as a binary property list
pub(crate) fn to_binary(value: &Value) -> Vec<u8> {
    let mut bytes = vec![];
    value.to_writer_binary(&mut bytes).unwrap();
    bytes
}

/// Unix seconds for an `NS.time` value with no fractional part
pub(crate) fn unix_seconds(ns_time: f64) -> i64 {
    ns_time as i64 + APPLE_EPOCH_OFFSET
}
