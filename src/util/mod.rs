/*!
 This module defines common helpers used across the record codecs.
*/

pub mod plist;
