/*!
 Keys Lockdown uses in each archived item dictionary.
*/

/// Whether the item was moved to the archive, stored as a bool
pub const ARCHIVED_KEY: &str = "itemIsArchivedKey";
/// Whether the item is pinned as a favorite, stored as a bool
pub const FAVORITE_KEY: &str = "itemFavoriteKey";
/// Reference to the service (issuer) name
pub const SERVICE_NAME_KEY: &str = "serviceNameKey";
/// Reference to the account (login) name
pub const ACCOUNT_NAME_KEY: &str = "accountNameKey";
/// Reference to the `NSDate` the item was created at
pub const DATE_CREATED_KEY: &str = "dateCreatedKey";
/// Reference to the `NSDate` the item was last changed at, or to `$null`
pub const DATE_MODIFIED_KEY: &str = "dateModifiedKey";
/// Reference to the item's URL, either a full `otpauth://` URI or a placeholder
pub const ITEM_URL_KEY: &str = "itemURLString";
/// Reference to the raw shared secret
pub const ITEM_KEY_KEY: &str = "itemKeyKey";
/// Key for the seconds value in an archived `NSDate`
pub const NS_TIME: &str = "NS.time";
