pub mod p901_best_sellers;
