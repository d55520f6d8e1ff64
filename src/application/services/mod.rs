/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
//! Implementations of the service traits
mod comment;
mod legacy;
mod message;
mod stream;
mod submission;
mod subverse;
mod system;
mod user;
mod vote;
