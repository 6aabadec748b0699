// Copyright (c) 2023-2024 Protect
// Distributed under the MIT software license

//! Detached user-signature list wire schema.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UserSignatures {
    #[prost(message, repeated, tag = "1")]
    pub signatures: ::prost::alloc::vec::Vec<UserSignature>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UserSignature {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "2")]
    pub signature: ::prost::alloc::vec::Vec<u8>,
}
