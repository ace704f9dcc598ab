pub mod a001_email_scan;
