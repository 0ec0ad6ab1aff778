mod test_auth;
mod test_pager;
mod test_webhook;
